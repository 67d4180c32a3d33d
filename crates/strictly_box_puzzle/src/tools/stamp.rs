//! Stamp tools: rewrite top faces in a shape around the target.
//!
//! Stamping defers to each box's kind, so unchanging and fixed boxes in
//! the shape are visited but keep their letters.

use super::super::grid::Grid;
use super::super::location::Location;
use super::super::types::{GRID_SIZE, Letter};
use tracing::instrument;

/// Stamps the target box and its up/down/left/right neighbors.
#[instrument(skip(grid))]
pub fn plus_shape(grid: &mut Grid, target: Location, letter: Letter) -> Vec<Location> {
    let mut touched = vec![target];
    touched.extend(grid.neighbors(target));
    for loc in &touched {
        grid.get_mut(*loc).restamp(letter);
    }
    touched
}

/// Stamps every box in the target's row.
#[instrument(skip(grid))]
pub fn row(grid: &mut Grid, target: Location, letter: Letter) -> Vec<Location> {
    for b in grid.row_mut(target.row()) {
        b.restamp(letter);
    }
    (0..GRID_SIZE)
        .map(|col| Location::from_indices(target.row(), col))
        .collect()
}

/// Stamps every box in the target's column.
#[instrument(skip(grid))]
pub fn column(grid: &mut Grid, target: Location, letter: Letter) -> Vec<Location> {
    for b in grid.column_mut(target.col()) {
        b.restamp(letter);
    }
    (0..GRID_SIZE)
        .map(|row| Location::from_indices(row, target.col()))
        .collect()
}
