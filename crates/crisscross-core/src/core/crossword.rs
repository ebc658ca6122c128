use super::grid::Grid;
use super::models::cell::Cell;
use super::models::ids::WordId;
use super::models::word::{Axis, Word, WordMap};
use super::score::{LayoutScore, LayoutStats};
use std::fmt;

/// A finished, numbered layout.
///
/// This is the only surface a renderer needs: cell lookup by coordinate, the placed words
/// with their reference numbers, and the summary statistics.
#[derive(Debug, Clone, Default)]
pub struct Crossword {
    grid: Grid,
    words: WordMap,
    stats: LayoutStats,
}

impl Crossword {
    pub(crate) fn new(grid: Grid, words: WordMap, stats: LayoutStats) -> Self {
        Self { grid, words, stats }
    }

    /// The trivial layout of an empty word list.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn area(&self) -> usize {
        self.stats.area
    }

    pub fn intersections(&self) -> usize {
        self.stats.intersections
    }

    pub fn all_intersecting(&self) -> bool {
        self.stats.all_intersecting
    }

    pub fn stats(&self) -> &LayoutStats {
        &self.stats
    }

    pub fn score(&self) -> LayoutScore {
        self.stats.score()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.grid.get(x as isize, y as isize)
    }

    pub fn character_at(&self, x: usize, y: usize) -> Option<char> {
        self.get(x, y).and_then(Cell::character)
    }

    /// The number shown in cell `(x, y)`: the reference index of the horizontal word starting
    /// there, otherwise of the vertical one.
    pub fn reference_at(&self, x: usize, y: usize) -> Option<usize> {
        let cell = self.get(x, y)?;
        cell.start_along(Axis::Horizontal)
            .or_else(|| cell.start_along(Axis::Vertical))
            .and_then(|id| self.words.get(id))
            .map(Word::reference_index)
    }

    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Placed words ordered by reference index. An across and a down word starting in the same
    /// cell share one index, so indices are unique per axis only.
    pub fn words(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.values().collect();
        words.sort_by_key(|word| word.reference_index());
        words
    }

    pub fn across(&self) -> Vec<&Word> {
        self.along(Axis::Horizontal)
    }

    pub fn down(&self) -> Vec<&Word> {
        self.along(Axis::Vertical)
    }

    fn along(&self, axis: Axis) -> Vec<&Word> {
        self.words()
            .into_iter()
            .filter(|word| word.axis() == axis)
            .collect()
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
