//! Box fixer.

use super::super::grid::Grid;
use super::super::location::Location;
use super::super::puzzle_box::BoxKind;
use super::ToolError;
use tracing::{debug, instrument};

/// Replaces the target with a fixed box carrying the same faces.
///
/// A tool still inside the old box is discarded with it.
#[instrument(skip(grid))]
pub fn fix(grid: &mut Grid, target: Location) -> Result<Vec<Location>, ToolError> {
    let current = grid.get(target);
    if current.kind() == BoxKind::Fixed {
        return Err(ToolError::AlreadyFixed(target));
    }
    let replacement = current.to_fixed();
    let old = grid.replace(target, replacement);
    debug!(discarded_tool = ?old.tool(), "Box replaced with fixed copy");
    Ok(vec![target])
}
