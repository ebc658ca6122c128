use crate::core::score::LayoutStats;

#[derive(Debug, Clone)]
pub enum Progress {
    SearchStart { attempts: usize, workers: usize },
    /// A candidate beat every layout found so far by any worker.
    Improved(LayoutStats),
    SearchFinish { attempts: usize, successes: usize },
    /// A notable event inside a worker: an early stop or a discarded inconsistent candidate.
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;
pub type StopPredicate<'a> = Box<dyn Fn() -> bool + Send + Sync + 'a>;

/// Carries the caller's improvement callback and early-stop predicate into the search.
///
/// The stop predicate is polled before every attempt. An attempt already in progress always
/// runs to completion.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
    stop: Option<StopPredicate<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
            stop: None,
        }
    }

    pub fn stop_when(mut self, predicate: StopPredicate<'a>) -> Self {
        self.stop = Some(predicate);
        self
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.as_ref().is_some_and(|stop| stop())
    }
}
