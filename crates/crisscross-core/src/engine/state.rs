use crate::core::crossword::Crossword;
use crate::core::score::LayoutScore;
use std::cmp::Ordering;
use std::sync::{Mutex, PoisonError};

/// A numbered layout together with the score it is ranked by.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub score: LayoutScore,
    pub crossword: Crossword,
}

impl Candidate {
    pub fn new(crossword: Crossword) -> Self {
        Self {
            score: crossword.score(),
            crossword,
        }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}
impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

/// Keeps `best` unless `challenger` is strictly better, so the earlier of two equal
/// candidates always wins.
pub fn select(best: Option<Candidate>, challenger: Candidate) -> Candidate {
    match best {
        Some(best) if challenger <= best => best,
        _ => challenger,
    }
}

/// The best score seen by any worker so far. Only decides whether an improvement is worth
/// reporting; the final winner is chosen from the workers' own results.
#[derive(Debug, Default)]
pub(crate) struct SharedBest {
    score: Mutex<Option<LayoutScore>>,
}

impl SharedBest {
    /// Records `score` and returns `true` if it beats everything offered before.
    pub(crate) fn offer(&self, score: LayoutScore) -> bool {
        let mut best = self.score.lock().unwrap_or_else(PoisonError::into_inner);
        if best.is_some_and(|current| score <= current) {
            return false;
        }
        *best = Some(score);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Grid;
    use crate::core::models::word::WordMap;
    use crate::core::score::LayoutStats;

    fn shaped(width: usize, height: usize, intersections: usize, all: bool) -> Candidate {
        let stats = LayoutStats {
            width,
            height,
            area: width * height,
            intersections,
            all_intersecting: all,
        };
        Candidate::new(Crossword::new(Grid::new(), WordMap::with_key(), stats))
    }

    fn candidate(all_intersecting: bool, intersections: usize, area: usize) -> Candidate {
        shaped(area, 1, intersections, all_intersecting)
    }

    #[test]
    fn select_prefers_strictly_better_challenger() {
        let kept = select(Some(candidate(false, 2, 20)), candidate(true, 1, 30));
        assert!(kept.score.all_intersecting);

        let kept = select(Some(candidate(true, 3, 12)), candidate(true, 3, 16));
        assert_eq!(kept.score.area, 12);
    }

    #[test]
    fn select_keeps_incumbent_on_tie() {
        let incumbent = shaped(3, 3, 2, true);
        let challenger = shaped(9, 1, 2, true);
        let kept = select(Some(incumbent), challenger);
        assert_eq!(kept.crossword.stats().width, 3);
    }

    #[test]
    fn select_takes_challenger_when_nothing_is_kept() {
        let kept = select(None, candidate(false, 0, 5));
        assert_eq!(kept.score.area, 5);
    }

    #[test]
    fn shared_best_only_accepts_strict_improvements() {
        let shared = SharedBest::default();
        assert!(shared.offer(candidate(false, 1, 10).score));
        assert!(!shared.offer(candidate(false, 1, 10).score));
        assert!(!shared.offer(candidate(false, 1, 12).score));
        assert!(shared.offer(candidate(false, 1, 8).score));
        assert!(shared.offer(candidate(true, 0, 50).score));
    }
}
