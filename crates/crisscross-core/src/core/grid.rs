use super::models::cell::{Cell, Occupant};
use super::models::word::Axis;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Shifting by ({dx}, {dy}) would push occupied cells out of the grid")]
    ShiftWouldDiscard { dx: isize, dy: isize },
}

/// A resizable, row-major 2-D buffer of optional cells.
///
/// The grid has no fixed origin: content that needs to start left of or above the current
/// buffer is accommodated by growing the buffer and shifting everything already placed.
/// Words only remember their per-letter indices, never absolute coordinates, so a shift
/// never has to touch them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Option<Cell>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    fn offset(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// The occupied cell at `(x, y)`. Out-of-bounds coordinates and cells without any
    /// occupant both read as absent.
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> Option<&Cell> {
        let offset = self.offset(x, y)?;
        self.cells[offset].as_ref().filter(|cell| !cell.is_empty())
    }

    /// Iterates occupied cells in row-major order as `(x, y, cell)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().filter_map(move |(i, slot)| {
            slot.as_ref()
                .filter(|cell| !cell.is_empty())
                .map(|cell| (i % width, i / width, cell))
        })
    }

    /// Reallocates the buffer, keeping the region that overlaps the old one anchored at the
    /// top-left corner. Non-positive dimensions clear the grid entirely.
    pub fn resize(&mut self, width: isize, height: isize) {
        if width <= 0 || height <= 0 {
            self.clear();
            return;
        }
        let (width, height) = (width as usize, height as usize);
        if width == self.width && height == self.height {
            return;
        }

        let mut old = std::mem::take(&mut self.cells);
        let mut cells = vec![None; width * height];
        for y in 0..height.min(self.height) {
            for x in 0..width.min(self.width) {
                cells[y * width + x] = old[y * self.width + x].take();
            }
        }

        self.cells = cells;
        self.width = width;
        self.height = height;
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.width = 0;
        self.height = 0;
    }

    /// Whether row `y` holds no occupied cell. Rows outside the buffer are empty.
    /// Cells that exist but carry no occupant are released along the way.
    pub fn row_empty(&mut self, y: isize) -> bool {
        if y < 0 || y as usize >= self.height {
            return true;
        }
        let start = y as usize * self.width;
        self.span_empty(start..start + self.width)
    }

    /// Column counterpart of [`Grid::row_empty`].
    pub fn col_empty(&mut self, x: isize) -> bool {
        if x < 0 || x as usize >= self.width {
            return true;
        }
        let x = x as usize;
        self.span_empty((x..self.cells.len()).step_by(self.width))
    }

    fn span_empty(&mut self, offsets: impl Iterator<Item = usize>) -> bool {
        for offset in offsets {
            match &self.cells[offset] {
                None => {}
                Some(cell) if cell.is_empty() => self.cells[offset] = None,
                Some(_) => return false,
            }
        }
        true
    }

    /// Whether every row and column that a shift by `(dx, dy)` would push out of the buffer
    /// is empty.
    pub fn can_shift(&mut self, dx: isize, dy: isize) -> bool {
        let (width, height) = (self.width as isize, self.height as isize);
        let rows = if dy < 0 {
            0..(-dy).min(height)
        } else {
            (height - dy).max(0)..height
        };
        let cols = if dx < 0 {
            0..(-dx).min(width)
        } else {
            (width - dx).max(0)..width
        };
        rows.into_iter().all(|y| self.row_empty(y)) && cols.into_iter().all(|x| self.col_empty(x))
    }

    /// Moves all content by `(dx, dy)` inside the current buffer. Refused, leaving the grid
    /// untouched, if any occupied cell would end up outside it.
    pub fn shift(&mut self, dx: isize, dy: isize) -> Result<(), GridError> {
        if !self.can_shift(dx, dy) {
            return Err(GridError::ShiftWouldDiscard { dx, dy });
        }
        self.translate(dx, dy);
        Ok(())
    }

    fn translate(&mut self, dx: isize, dy: isize) {
        if dx == 0 && dy == 0 {
            return;
        }
        let width = self.width;
        let old = std::mem::replace(&mut self.cells, vec![None; width * self.height]);
        for (i, slot) in old.into_iter().enumerate() {
            let Some(cell) = slot else { continue };
            let x = (i % width) as isize + dx;
            let y = (i / width) as isize + dy;
            if let Some(target) = self.offset(x, y) {
                self.cells[target] = Some(cell);
            }
        }
    }

    /// Shrinks the grid to the bounding box of its occupied cells.
    pub fn trim(&mut self) {
        let height = self.height as isize;
        let width = self.width as isize;

        let top = (0..height).find(|&y| !self.row_empty(y)).unwrap_or(height);
        self.translate(0, -top);
        let left = (0..width).find(|&x| !self.col_empty(x)).unwrap_or(width);
        self.translate(-left, 0);

        let mut bottom = height;
        while bottom > 0 && self.row_empty(bottom - 1) {
            bottom -= 1;
        }
        let mut right = width;
        while right > 0 && self.col_empty(right - 1) {
            right -= 1;
        }
        self.resize(right, bottom);
    }

    pub(crate) fn occupy(&mut self, x: usize, y: usize, axis: Axis, occupant: Occupant) {
        let offset = y * self.width + x;
        self.cells[offset]
            .get_or_insert_with(Cell::default)
            .occupy(axis, occupant);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let letter = self
                    .get(x as isize, y as isize)
                    .and_then(Cell::character)
                    .unwrap_or('.');
                write!(f, "{}", letter)?;
                if x != self.width - 1 {
                    write!(f, " ")?;
                }
            }
            if y != self.height - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
