//! Domino propagation of a roll along a row or column.

use super::super::grid::Grid;
use super::super::location::Location;
use super::super::types::Direction;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What a domino roll did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoOutcome {
    /// Where the chain started.
    pub start: Location,
    /// Direction of travel.
    pub direction: Direction,
    /// Every rolled location in path order, starting with `start`.
    pub moved: Vec<Location>,
    /// The box that halted the chain, if it was not the border.
    pub stopped_by: Option<Location>,
}

/// Rolls `start` and then each following box in `direction`.
///
/// The start box always rolls. The chain stops at the border or just
/// before the first box that does not allow the domino; that box is left
/// untouched and not recorded.
#[instrument(skip(grid))]
pub fn propagate(grid: &mut Grid, start: Location, direction: Direction) -> DominoOutcome {
    grid.get_mut(start).roll(direction);
    let mut moved = vec![start];
    let mut stopped_by = None;

    let mut cursor = start;
    while let Some(next) = cursor.step(direction) {
        let b = grid.get_mut(next);
        if !b.allows_domino() {
            debug!(blocker = %next, "Domino stopped by fixed box");
            stopped_by = Some(next);
            break;
        }
        b.roll(direction);
        moved.push(next);
        cursor = next;
    }

    debug!(rolled = moved.len(), "Domino finished");
    DominoOutcome {
        start,
        direction,
        moved,
        stopped_by,
    }
}
