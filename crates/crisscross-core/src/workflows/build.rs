use crate::core::crossword::Crossword;
use crate::core::models::word::{Word, WordMap};
use crate::engine::config::{BalanceConfig, SearchConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{Candidate, SharedBest, select};
use crate::engine::tasks::fill::FillDriver;
use crate::engine::tasks::numbering;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, Copy)]
struct WorkerJob {
    index: usize,
    attempts: usize,
    seed: u64,
}

#[derive(Debug, Default)]
struct WorkerOutcome {
    attempts: usize,
    successes: usize,
    best: Option<Candidate>,
}

/// Searches for the best layout of `words`.
///
/// Returns `Ok(None)` when no attempt succeeded, and an empty crossword for an empty word
/// list. The result is fully determined by the words, `config.seed`, `config.max_attempts`
/// and `config.workers`, unless the reporter's stop predicate cuts the search short.
#[instrument(skip_all, name = "build_workflow")]
pub fn run<S: AsRef<str>>(
    words: &[S],
    config: &SearchConfig,
    reporter: &ProgressReporter,
) -> Result<Option<Crossword>, EngineError> {
    config.validate()?;
    let words = prepare_words(words)?;
    if words.is_empty() {
        info!("Empty word list; returning an empty crossword.");
        return Ok(Some(Crossword::empty()));
    }

    info!(
        words = words.len(),
        attempts = config.max_attempts,
        workers = config.workers,
        seed = config.seed,
        "Starting layout search."
    );
    reporter.report(Progress::SearchStart {
        attempts: config.max_attempts,
        workers: config.workers,
    });

    let mut master = StdRng::seed_from_u64(config.seed);
    let jobs: Vec<WorkerJob> = partition(config.max_attempts, config.workers)
        .into_iter()
        .enumerate()
        .map(|(index, attempts)| WorkerJob {
            index,
            attempts,
            seed: master.next_u64(),
        })
        .collect();

    let shared = SharedBest::default();

    #[cfg(not(feature = "parallel"))]
    let iterator = jobs.iter();

    #[cfg(feature = "parallel")]
    let iterator = jobs.par_iter();

    let outcomes: Vec<WorkerOutcome> = iterator
        .map(|job| run_worker(job, &words, &config.balance, reporter, &shared))
        .collect();

    let attempts: usize = outcomes.iter().map(|o| o.attempts).sum();
    let successes: usize = outcomes.iter().map(|o| o.successes).sum();
    let best = outcomes
        .into_iter()
        .filter_map(|outcome| outcome.best)
        .fold(None, |best, challenger| Some(select(best, challenger)));

    reporter.report(Progress::SearchFinish {
        attempts,
        successes,
    });

    match &best {
        Some(candidate) => info!(
            attempts,
            successes,
            width = candidate.crossword.width(),
            height = candidate.crossword.height(),
            intersections = candidate.score.intersections,
            all_intersecting = candidate.score.all_intersecting,
            "Layout search finished."
        ),
        None => info!(attempts, "Layout search finished without a layout."),
    }

    Ok(best.map(|candidate| candidate.crossword))
}

/// Turns raw strings into the word set every attempt starts from.
fn prepare_words<S: AsRef<str>>(raw: &[S]) -> Result<WordMap, EngineError> {
    let mut words = WordMap::with_capacity_and_key(raw.len());
    let mut seen = HashSet::with_capacity(raw.len());

    for text in raw {
        let text = text.as_ref();
        if text.is_empty() {
            return Err(EngineError::InvalidWord {
                word: text.to_string(),
                reason: "word is empty",
            });
        }
        if !text.chars().all(char::is_alphabetic) {
            return Err(EngineError::InvalidWord {
                word: text.to_string(),
                reason: "word contains characters other than letters",
            });
        }
        let word = Word::new(text);
        if !seen.insert(word.text().to_string()) {
            return Err(EngineError::DuplicateWord(word.text().to_string()));
        }
        words.insert(word);
    }

    Ok(words)
}

/// Splits `attempts` over `workers` as evenly as possible, earlier workers taking the
/// remainder.
fn partition(attempts: usize, workers: usize) -> Vec<usize> {
    let workers = workers.max(1);
    let share = attempts / workers;
    let remainder = attempts % workers;
    (0..workers)
        .map(|index| share + usize::from(index < remainder))
        .collect()
}

fn run_worker(
    job: &WorkerJob,
    words: &WordMap,
    balance: &BalanceConfig,
    reporter: &ProgressReporter,
    shared: &SharedBest,
) -> WorkerOutcome {
    let mut rng = StdRng::seed_from_u64(job.seed);
    let mut outcome = WorkerOutcome::default();

    for _ in 0..job.attempts {
        if reporter.should_stop() {
            debug!(worker = job.index, "Stop requested; ending worker early.");
            reporter.report(Progress::Message(format!(
                "Worker {} stopped after {} of {} attempt(s).",
                job.index, outcome.attempts, job.attempts
            )));
            break;
        }
        outcome.attempts += 1;

        let Some(candidate) = attempt(words, balance, reporter, &mut rng) else {
            continue;
        };
        outcome.successes += 1;

        if outcome
            .best
            .as_ref()
            .is_none_or(|best| candidate.score > best.score)
        {
            if shared.offer(candidate.score) {
                let stats = *candidate.crossword.stats();
                info!(
                    worker = job.index,
                    intersections = stats.intersections,
                    area = stats.area,
                    all_intersecting = stats.all_intersecting,
                    "Found improved layout."
                );
                reporter.report(Progress::Improved(stats));
            }
            outcome.best = Some(candidate);
        }
    }

    debug!(
        worker = job.index,
        attempts = outcome.attempts,
        successes = outcome.successes,
        "Worker finished."
    );
    outcome
}

/// One fill on a fresh copy of the words, followed by trimming and numbering.
fn attempt<R: Rng + ?Sized>(
    words: &WordMap,
    balance: &BalanceConfig,
    reporter: &ProgressReporter,
    rng: &mut R,
) -> Option<Candidate> {
    let (mut grid, mut words) = FillDriver::new(words.clone(), *balance).run(rng)?;
    grid.trim();
    match numbering::assign(&grid, &mut words) {
        Ok(stats) => Some(Candidate::new(Crossword::new(grid, words, stats))),
        Err(error) => {
            debug!(%error, "Discarding inconsistent candidate.");
            reporter.report(Progress::Message(format!(
                "Discarded inconsistent candidate: {error}"
            )));
            None
        }
    }
}
