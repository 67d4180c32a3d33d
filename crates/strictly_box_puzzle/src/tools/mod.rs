//! One-shot tools found inside boxes.
//!
//! Each tool is a stateless effect over the grid. Effects live in their
//! own modules so they can be tested without the turn engine.

pub mod fix;
pub mod flip;
pub mod stamp;

use super::grid::Grid;
use super::location::Location;
use super::types::Letter;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// The five tool kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Tool {
    /// Stamps the target and its four neighbors.
    PlusShapeStamp,
    /// Stamps every box in the target's row.
    MassRowStamp,
    /// Stamps every box in the target's column.
    MassColumnStamp,
    /// Turns the target box upside down.
    BoxFlipper,
    /// Replaces the target with a fixed box.
    BoxFixer,
}

/// Why a tool could not take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum ToolError {
    /// The fixer was used on a box that is already fixed.
    #[display("Cannot fix the box at {} because it is already fixed", _0)]
    AlreadyFixed(Location),

    /// The flipper was used on a fixed box.
    #[display("Cannot flip the fixed box at {}", _0)]
    IllegalMove(Location),
}

impl std::error::Error for ToolError {}

impl Tool {
    /// Applies the tool's effect at `target`, stamping with `letter` where relevant.
    ///
    /// Returns the locations the effect touched.
    #[instrument(skip(grid))]
    pub fn apply(
        self,
        grid: &mut Grid,
        target: Location,
        letter: Letter,
    ) -> Result<Vec<Location>, ToolError> {
        let result = match self {
            Tool::PlusShapeStamp => Ok(stamp::plus_shape(grid, target, letter)),
            Tool::MassRowStamp => Ok(stamp::row(grid, target, letter)),
            Tool::MassColumnStamp => Ok(stamp::column(grid, target, letter)),
            Tool::BoxFlipper => flip::flip(grid, target),
            Tool::BoxFixer => fix::fix(grid, target),
        };
        match &result {
            Ok(touched) => info!(tool = %self, %target, touched = touched.len(), "Tool applied"),
            Err(e) => warn!(tool = %self, %target, error = %e, "Tool had no effect"),
        }
        result
    }

    /// Short description of what the tool does, for players.
    pub fn description(self) -> &'static str {
        match self {
            Tool::PlusShapeStamp => "stamps the chosen box and its four neighbors",
            Tool::MassRowStamp => "stamps every box in the chosen row",
            Tool::MassColumnStamp => "stamps every box in the chosen column",
            Tool::BoxFlipper => "flips the chosen box upside down",
            Tool::BoxFixer => "turns the chosen box into a fixed box",
        }
    }
}
