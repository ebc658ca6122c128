use super::ids::WordId;
use slotmap::SlotMap;
use std::fmt;

/// All words taking part in one layout, keyed by the id their cells refer to.
pub type WordMap = SlotMap<WordId, Word>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn flipped(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Unit step `(dx, dy)` taken from one letter to the next along this axis.
    #[inline]
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "across"),
            Axis::Vertical => write!(f, "down"),
        }
    }
}

/// A word to be laid out.
///
/// The text never changes once constructed. The axis is reassigned freely while a layout is
/// being searched for, and the reference index and intersection count are derived from the
/// grid once a candidate is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
    axis: Axis,
    reference_index: usize,
    intersections: usize,
}

impl Word {
    /// Creates a word from raw text. Letters are compared case-insensitively, so the text is
    /// stored upper-cased.
    pub fn new(text: &str) -> Self {
        let text = text.to_uppercase();
        let letters = text.chars().collect();
        Self {
            text,
            letters,
            axis: Axis::Horizontal,
            reference_index: 0,
            intersections: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// Length in letters, not bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    pub fn flip_axis(&mut self) {
        self.axis = self.axis.flipped();
    }

    /// The number printed beside the word's first cell; 0 while unassigned.
    pub fn reference_index(&self) -> usize {
        self.reference_index
    }

    pub fn intersections(&self) -> usize {
        self.intersections
    }

    pub(crate) fn set_reference_index(&mut self, index: usize) {
        self.reference_index = index;
    }

    pub(crate) fn add_intersection(&mut self) {
        self.intersections += 1;
    }

    pub(crate) fn reset_numbering(&mut self) {
        self.reference_index = 0;
        self.intersections = 0;
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
