use crate::core::grid::Grid;
use crate::core::models::word::{Axis, WordMap};
use crate::core::score::LayoutStats;
use thiserror::Error;

/// A finished grid whose cells and words disagree. Never expected from a correct fill; the
/// candidate is discarded when it happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberingError {
    #[error("Word '{word}' starts more than once (again at ({x}, {y}))")]
    AlreadyNumbered { word: String, x: usize, y: usize },

    #[error("Word '{word}' starts {found} at ({x}, {y}) but is recorded as {recorded}")]
    AxisMismatch {
        word: String,
        x: usize,
        y: usize,
        found: Axis,
        recorded: Axis,
    },

    #[error("Word '{0}' has no start cell in the grid")]
    Unnumbered(String),

    #[error("Cell ({x}, {y}) refers to a word that is not part of the layout")]
    UnknownWord { x: usize, y: usize },
}

/// Numbers word starts in row-major order and tallies intersections.
///
/// A cell where both a horizontal and a vertical word start carries a single number shared
/// by both. Any previous numbering on `words` is discarded first.
pub fn assign(grid: &Grid, words: &mut WordMap) -> Result<LayoutStats, NumberingError> {
    for word in words.values_mut() {
        word.reset_numbering();
    }

    let mut next = 1;
    let mut intersections = 0;

    for (x, y, cell) in grid.occupied() {
        if cell.is_intersection() {
            intersections += 1;
            for occupant in [cell.along_x(), cell.along_y()].into_iter().flatten() {
                words
                    .get_mut(occupant.word)
                    .ok_or(NumberingError::UnknownWord { x, y })?
                    .add_intersection();
            }
        }

        let mut numbered_here = false;
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let Some(id) = cell.start_along(axis) else {
                continue;
            };
            let word = words
                .get_mut(id)
                .ok_or(NumberingError::UnknownWord { x, y })?;
            if word.axis() != axis {
                return Err(NumberingError::AxisMismatch {
                    word: word.text().to_string(),
                    x,
                    y,
                    found: axis,
                    recorded: word.axis(),
                });
            }
            if word.reference_index() != 0 {
                return Err(NumberingError::AlreadyNumbered {
                    word: word.text().to_string(),
                    x,
                    y,
                });
            }
            word.set_reference_index(next);
            numbered_here = true;
        }
        if numbered_here {
            next += 1;
        }
    }

    if let Some(word) = words.values().find(|word| word.reference_index() == 0) {
        return Err(NumberingError::Unnumbered(word.text().to_string()));
    }

    let all_intersecting = words.len() > 1 && words.values().all(|word| word.intersections() > 0);

    Ok(LayoutStats {
        width: grid.width(),
        height: grid.height(),
        area: grid.area(),
        intersections,
        all_intersecting,
    })
}
