use crisscross::engine::progress::{Progress, ProgressCallback, StopPredicate};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    pub improvements: usize,
    pub attempts: usize,
    pub successes: usize,
}

/// Turns search progress into log lines and keeps a running summary for the final report.
#[derive(Clone, Default)]
pub struct CliProgressHandler {
    summary: Arc<Mutex<SearchSummary>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let summary = self.summary.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut summary) = summary.lock() else {
                warn!("Progress summary mutex was poisoned. Cannot record progress.");
                return;
            };

            match progress {
                Progress::SearchStart { attempts, workers } => {
                    info!("Searching with {} attempt(s) over {} worker(s)...", attempts, workers);
                }
                Progress::Improved(stats) => {
                    summary.improvements += 1;
                    info!(
                        "Improved layout #{}: {}x{}, {} intersection(s){}",
                        summary.improvements,
                        stats.width,
                        stats.height,
                        stats.intersections,
                        if stats.all_intersecting {
                            ", every word crossed"
                        } else {
                            ""
                        }
                    );
                }
                Progress::SearchFinish {
                    attempts,
                    successes,
                } => {
                    summary.attempts = attempts;
                    summary.successes = successes;
                    info!(
                        "Search finished: {} of {} attempt(s) produced a layout.",
                        successes, attempts
                    );
                }
                Progress::Message(msg) => info!("{}", msg),
            }
        })
    }

    pub fn summary(&self) -> SearchSummary {
        *self.summary.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A stop predicate that turns true once `limit` has elapsed from now.
pub fn deadline(limit: Duration) -> StopPredicate<'static> {
    let start = Instant::now();
    Box::new(move || start.elapsed() >= limit)
}
