use crate::core::grid::Grid;
use crate::core::models::ids::WordId;
use crate::core::models::word::WordMap;
use crate::engine::config::BalanceConfig;
use crate::engine::placement;
use crate::engine::tasks::axis_balance;
use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPhase {
    /// Axes not assigned yet; the next step balances them and places the anchor word.
    Balancing,
    /// The next pending word is tried at every crossing with the grid.
    Inserting,
    /// The last word found no crossing and went to the back of the queue.
    Requeued,
    /// Failures outnumber pending words; the next word is flipped and, failing that,
    /// placed anywhere it fits.
    BruteForcing,
    Succeeded,
    Failed,
}

impl FillPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, FillPhase::Succeeded | FillPhase::Failed)
    }
}

/// Drives one layout attempt as an explicit state machine over [`FillPhase`].
///
/// The driver owns its words and grid outright, so a discarded attempt never leaks state
/// into the next one.
#[derive(Debug, Clone)]
pub struct FillDriver {
    words: WordMap,
    grid: Grid,
    pending: VecDeque<WordId>,
    fails: usize,
    phase: FillPhase,
    balance: BalanceConfig,
}

impl FillDriver {
    pub fn new(words: WordMap, balance: BalanceConfig) -> Self {
        Self {
            words,
            grid: Grid::new(),
            pending: VecDeque::new(),
            fails: 0,
            phase: FillPhase::Balancing,
            balance,
        }
    }

    pub fn phase(&self) -> FillPhase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &WordMap {
        &self.words
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn fails(&self) -> usize {
        self.fails
    }

    /// Performs one transition. Terminal phases are left unchanged.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FillPhase {
        self.phase = match self.phase {
            FillPhase::Balancing => self.start(rng),
            FillPhase::Inserting => self.insert_next(rng),
            FillPhase::Requeued => self.next_phase(),
            FillPhase::BruteForcing => self.force_next(rng),
            terminal => terminal,
        };
        self.phase
    }

    /// Steps until a terminal phase and hands back the filled grid with its words.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Option<(Grid, WordMap)> {
        while !self.phase.is_terminal() {
            self.step(rng);
        }
        match self.phase {
            FillPhase::Succeeded => Some((self.grid, self.words)),
            _ => None,
        }
    }

    fn next_phase(&self) -> FillPhase {
        if self.pending.is_empty() {
            FillPhase::Succeeded
        } else if self.fails > self.pending.len() {
            FillPhase::BruteForcing
        } else {
            FillPhase::Inserting
        }
    }

    fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FillPhase {
        axis_balance::balance(&mut self.words, &self.balance, rng);

        let mut order: Vec<WordId> = self.words.keys().collect();
        order.shuffle(rng);
        self.pending = order.into();

        let Some(anchor) = self.pending.pop_front() else {
            return FillPhase::Succeeded;
        };
        if !self.try_origins(anchor, [(0, 0)]) {
            debug!("Anchor word could not be placed on an empty grid.");
            return FillPhase::Failed;
        }
        self.next_phase()
    }

    fn insert_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FillPhase {
        let Some(id) = self.pending.pop_front() else {
            return FillPhase::Succeeded;
        };
        if self.insert_crossing(id, rng) {
            self.fails = 0;
            return self.next_phase();
        }
        self.pending.push_back(id);
        self.fails += 1;
        FillPhase::Requeued
    }

    fn force_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FillPhase {
        let Some(id) = self.pending.pop_front() else {
            return FillPhase::Succeeded;
        };

        self.flip(id);
        if self.insert_crossing(id, rng) {
            self.fails = 0;
            return self.next_phase();
        }
        self.flip(id);

        if self.insert_anywhere(id, rng) {
            self.fails = 0;
            return self.next_phase();
        }
        debug!(
            pending = self.pending.len(),
            "Brute-force placement failed; abandoning attempt."
        );
        FillPhase::Failed
    }

    fn flip(&mut self, id: WordId) {
        if let Some(word) = self.words.get_mut(id) {
            word.flip_axis();
        }
    }

    /// Tries every origin that lines one of the word's letters up with an equal letter
    /// already in the grid, crossing a word of the other axis.
    fn insert_crossing<R: Rng + ?Sized>(&mut self, id: WordId, rng: &mut R) -> bool {
        let Some(word) = self.words.get(id) else {
            return false;
        };
        let axis = word.axis();
        let (sx, sy) = axis.step();

        let mut origins: Vec<(isize, isize)> = self
            .grid
            .occupied()
            .filter(|(_, _, cell)| cell.along(axis).is_none())
            .flat_map(|(x, y, cell)| {
                let letter = cell.character();
                word.letters()
                    .iter()
                    .positions(move |&l| Some(l) == letter)
                    .map(move |i| (x as isize - sx * i as isize, y as isize - sy * i as isize))
            })
            .collect();
        origins.shuffle(rng);

        self.try_origins(id, origins)
    }

    /// Tries every origin in the grid's bounds widened by the word's length on each side.
    fn insert_anywhere<R: Rng + ?Sized>(&mut self, id: WordId, rng: &mut R) -> bool {
        let Some(word) = self.words.get(id) else {
            return false;
        };
        let len = word.len() as isize;
        let (width, height) = (self.grid.width() as isize, self.grid.height() as isize);

        let mut origins: Vec<(isize, isize)> = (-len..height + len)
            .cartesian_product(-len..width + len)
            .map(|(y, x)| (x, y))
            .collect();
        origins.shuffle(rng);

        self.try_origins(id, origins)
    }

    fn try_origins(
        &mut self,
        id: WordId,
        origins: impl IntoIterator<Item = (isize, isize)>,
    ) -> bool {
        let Some(word) = self.words.get(id) else {
            return false;
        };
        for (x, y) in origins {
            match placement::place(&mut self.grid, id, word, x, y) {
                Ok(()) => return true,
                Err(error) => trace!(word = word.text(), x, y, %error, "Placement rejected."),
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::word::Word;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn driver(texts: &[&str]) -> FillDriver {
        let mut words = WordMap::with_key();
        for text in texts {
            words.insert(Word::new(text));
        }
        FillDriver::new(words, BalanceConfig::default())
    }

    fn placed_letters(grid: &Grid) -> usize {
        grid.occupied()
            .map(|(_, _, cell)| {
                cell.along_x().is_some() as usize + cell.along_y().is_some() as usize
            })
            .sum()
    }

    #[test]
    fn empty_word_list_succeeds_immediately() {
        let mut fill = driver(&[]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(fill.step(&mut rng), FillPhase::Succeeded);
        assert_eq!(fill.grid().area(), 0);
    }

    #[test]
    fn single_word_is_anchored_at_the_origin() {
        let mut fill = driver(&["HELLO"]);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(fill.step(&mut rng), FillPhase::Succeeded);

        let grid = fill.grid();
        assert!(matches!((grid.width(), grid.height()), (5, 1) | (1, 5)));
        assert_eq!(grid.get(0, 0).and_then(|c| c.character()), Some('H'));
    }

    #[test]
    fn unrelated_words_escalate_to_brute_force() {
        let mut fill = driver(&["ABC", "XYZ"]);
        let mut rng = StdRng::seed_from_u64(3);

        let phases: Vec<FillPhase> = std::iter::from_fn(|| {
            (!fill.phase().is_terminal()).then(|| fill.step(&mut rng))
        })
        .collect();

        assert_eq!(
            phases,
            vec![
                FillPhase::Inserting,
                FillPhase::Requeued,
                FillPhase::Inserting,
                FillPhase::Requeued,
                FillPhase::BruteForcing,
                FillPhase::Succeeded,
            ]
        );
        assert_eq!(fill.fails(), 0);
        assert_eq!(fill.pending(), 0);
        assert_eq!(placed_letters(fill.grid()), 6);
    }

    #[test]
    fn crossing_insertion_resets_the_fail_counter() {
        let mut fill = driver(&["CAT", "CAR"]);
        let mut rng = StdRng::seed_from_u64(21);

        assert_eq!(fill.step(&mut rng), FillPhase::Inserting);
        assert_eq!(fill.step(&mut rng), FillPhase::Succeeded);
        assert_eq!(fill.fails(), 0);

        let crossings = fill
            .grid()
            .occupied()
            .filter(|(_, _, cell)| cell.is_intersection())
            .count();
        assert!(crossings >= 1);
    }

    #[test]
    fn run_places_every_letter_of_every_word() {
        let texts = ["CAT", "CAR", "ART", "TRACE", "REACT"];
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (grid, words) = driver(&texts).run(&mut rng).expect("fill should succeed");
            assert_eq!(words.len(), texts.len());
            assert_eq!(
                placed_letters(&grid),
                texts.iter().map(|t| t.len()).sum::<usize>()
            );
        }
    }

    #[test]
    fn terminal_phases_are_stable() {
        let mut fill = driver(&["ONE"]);
        fill.phase = FillPhase::Failed;
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(fill.step(&mut rng), FillPhase::Failed);
        assert!(fill.run(&mut rng).is_none());
    }
}
