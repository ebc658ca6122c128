use super::ids::WordId;
use super::word::Axis;

/// One word passing through a cell: which word, and at which of its letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub word: WordId,
    pub index: usize,
    pub letter: char,
}

impl Occupant {
    /// A word starts at the cell holding its first letter.
    #[inline]
    pub fn is_start(&self) -> bool {
        self.index == 0
    }
}

/// A grid position crossed by at most one horizontal and one vertical word.
///
/// When both occupants are present their letters are equal; placement validation guarantees
/// this before anything is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    along_x: Option<Occupant>,
    along_y: Option<Occupant>,
}

impl Cell {
    pub fn along_x(&self) -> Option<&Occupant> {
        self.along_x.as_ref()
    }

    pub fn along_y(&self) -> Option<&Occupant> {
        self.along_y.as_ref()
    }

    #[inline]
    pub fn along(&self, axis: Axis) -> Option<&Occupant> {
        match axis {
            Axis::Horizontal => self.along_x.as_ref(),
            Axis::Vertical => self.along_y.as_ref(),
        }
    }

    /// A cell with no occupant carries no letter and is treated as absent.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.along_x.is_none() && self.along_y.is_none()
    }

    pub fn is_intersection(&self) -> bool {
        self.along_x.is_some() && self.along_y.is_some()
    }

    pub fn character(&self) -> Option<char> {
        self.along_x.or(self.along_y).map(|occupant| occupant.letter)
    }

    /// The word beginning at this cell along `axis`, if any.
    pub fn start_along(&self, axis: Axis) -> Option<WordId> {
        self.along(axis)
            .filter(|occupant| occupant.is_start())
            .map(|occupant| occupant.word)
    }

    pub(crate) fn occupy(&mut self, axis: Axis, occupant: Occupant) {
        match axis {
            Axis::Horizontal => self.along_x = Some(occupant),
            Axis::Vertical => self.along_y = Some(occupant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn two_ids() -> (WordId, WordId) {
        let mut keys: SlotMap<WordId, ()> = SlotMap::with_key();
        (keys.insert(()), keys.insert(()))
    }

    #[test]
    fn default_cell_is_empty_and_has_no_character() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert!(!cell.is_intersection());
        assert_eq!(cell.character(), None);
    }

    #[test]
    fn crossed_cell_reports_shared_letter_and_starts() {
        let (across, down) = two_ids();
        let mut cell = Cell::default();
        cell.occupy(
            Axis::Horizontal,
            Occupant {
                word: across,
                index: 2,
                letter: 'T',
            },
        );
        assert_eq!(cell.character(), Some('T'));
        assert!(!cell.is_intersection());

        cell.occupy(
            Axis::Vertical,
            Occupant {
                word: down,
                index: 0,
                letter: 'T',
            },
        );
        assert!(cell.is_intersection());
        assert_eq!(cell.character(), Some('T'));
        assert_eq!(cell.start_along(Axis::Horizontal), None);
        assert_eq!(cell.start_along(Axis::Vertical), Some(down));
        assert_eq!(cell.along(Axis::Horizontal).map(|o| o.word), Some(across));
    }
}
