use crate::core::grid::{Grid, GridError};
use crate::core::models::cell::Occupant;
use crate::core::models::ids::WordId;
use crate::core::models::word::Word;
use thiserror::Error;

/// Why a word cannot go at a particular coordinate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("Word would touch another word end-to-end at ({x}, {y})")]
    TouchesEnd { x: isize, y: isize },

    #[error("Cell ({x}, {y}) is already used by a word on the same axis")]
    SameAxisOverlap { x: isize, y: isize },

    #[error("Cell ({x}, {y}) holds '{existing}' but the word needs '{wanted}'")]
    LetterMismatch {
        x: isize,
        y: isize,
        existing: char,
        wanted: char,
    },

    #[error("Letter at ({x}, {y}) would run flush against a neighbouring word")]
    FlushNeighbor { x: isize, y: isize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Checks whether `word` can start at `(x, y)` along its current axis without mutating the
/// grid.
///
/// Neighbour lookups go through [`Grid::get`], so anything outside the buffer counts as empty.
pub fn can_place(grid: &Grid, word: &Word, x: isize, y: isize) -> Result<(), PlacementError> {
    let axis = word.axis();
    let (sx, sy) = axis.step();
    let (px, py) = axis.flipped().step();
    let len = word.len() as isize;

    let (bx, by) = (x - sx, y - sy);
    if grid.get(bx, by).is_some() {
        return Err(PlacementError::TouchesEnd { x: bx, y: by });
    }
    let (ax, ay) = (x + sx * len, y + sy * len);
    if grid.get(ax, ay).is_some() {
        return Err(PlacementError::TouchesEnd { x: ax, y: ay });
    }

    for (i, &wanted) in word.letters().iter().enumerate() {
        let (cx, cy) = (x + sx * i as isize, y + sy * i as isize);

        if let Some(cell) = grid.get(cx, cy) {
            if cell.along(axis).is_some() {
                return Err(PlacementError::SameAxisOverlap { x: cx, y: cy });
            }
            let existing = cell.character().unwrap_or(wanted);
            if existing != wanted {
                return Err(PlacementError::LetterMismatch {
                    x: cx,
                    y: cy,
                    existing,
                    wanted,
                });
            }
            continue;
        }

        if grid.get(cx - px, cy - py).is_some() || grid.get(cx + px, cy + py).is_some() {
            return Err(PlacementError::FlushNeighbor { x: cx, y: cy });
        }
    }

    Ok(())
}

/// Validates and writes `word` starting at `(x, y)`.
///
/// Negative coordinates grow the grid towards the top/left and shift existing content, so
/// the word may land at a different absolute position than requested. On error the grid is
/// left exactly as it was.
pub fn place(
    grid: &mut Grid,
    id: WordId,
    word: &Word,
    x: isize,
    y: isize,
) -> Result<(), PlacementError> {
    can_place(grid, word, x, y)?;

    let axis = word.axis();
    let (sx, sy) = axis.step();
    let last = word.len().saturating_sub(1) as isize;
    let (ex, ey) = (x + sx * last, y + sy * last);

    let dx = (-x).max(0);
    let dy = (-y).max(0);
    let width = (grid.width() as isize + dx).max(ex + dx + 1);
    let height = (grid.height() as isize + dy).max(ey + dy + 1);

    let mut grown = grid.clone();
    grown.resize(width, height);
    grown.shift(dx, dy)?;

    let (ox, oy) = (x + dx, y + dy);
    for (index, &letter) in word.letters().iter().enumerate() {
        let cx = (ox + sx * index as isize) as usize;
        let cy = (oy + sy * index as isize) as usize;
        grown.occupy(
            cx,
            cy,
            axis,
            Occupant {
                word: id,
                index,
                letter,
            },
        );
    }

    *grid = grown;
    Ok(())
}
