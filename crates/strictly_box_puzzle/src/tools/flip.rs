//! Box flipper.

use super::super::grid::Grid;
use super::super::location::Location;
use super::ToolError;
use tracing::instrument;

/// Turns the target box upside down. Fixed boxes refuse.
#[instrument(skip(grid))]
pub fn flip(grid: &mut Grid, target: Location) -> Result<Vec<Location>, ToolError> {
    let b = grid.get_mut(target);
    if !b.can_roll() {
        return Err(ToolError::IllegalMove(target));
    }
    b.flip();
    Ok(vec![target])
}
