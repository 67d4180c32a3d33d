//! First-class actions and turn errors.
//!
//! A roll is a domain value: the player's intent, validated by contracts
//! before the grid is touched.

use super::location::Location;
use super::rules::{CornerChoices, EdgeDirection};
use super::tools::ToolError;
use super::types::Direction;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Roll the edge box at `location` towards `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollAction {
    /// The edge box to push.
    pub location: Location,
    /// Inward direction of travel.
    pub direction: Direction,
}

impl RollAction {
    /// Creates a roll action.
    #[instrument]
    pub fn new(location: Location, direction: Direction) -> Self {
        Self { location, direction }
    }
}

impl std::fmt::Display for RollAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.location, self.direction)
    }
}

/// An edge location that passed stage-one selection, with its direction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeSelection {
    location: Location,
    rule: EdgeDirection,
}

impl EdgeSelection {
    pub(crate) fn new(location: Location, rule: EdgeDirection) -> Self {
        Self { location, rule }
    }

    /// The selected location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// How the roll direction is decided for this box.
    pub fn rule(&self) -> EdgeDirection {
        self.rule
    }

    /// The two options when the selection is a corner.
    pub fn corner_choices(&self) -> Option<CornerChoices> {
        match self.rule {
            EdgeDirection::Corner(choices) => Some(choices),
            EdgeDirection::Forced(_) => None,
        }
    }

    /// The roll, when the direction is forced.
    pub fn forced(&self) -> Option<RollAction> {
        match self.rule {
            EdgeDirection::Forced(direction) => Some(RollAction::new(self.location, direction)),
            EdgeDirection::Corner(_) => None,
        }
    }

    /// Builds the roll with a chosen direction, rejecting outward ones.
    pub fn with_direction(&self, direction: Direction) -> Result<RollAction, TurnError> {
        if self.rule.permits(direction) {
            Ok(RollAction::new(self.location, direction))
        } else {
            Err(TurnError::DirectionNotInward {
                location: self.location,
                direction,
            })
        }
    }
}

/// Errors raised while playing a turn.
///
/// The first three are input problems and leave the stage unchanged.
/// The rest end the turn, or the tool step, and are recorded in its report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum TurnError {
    /// Stage one picked a box off the edge.
    #[display("The box at {} is not on any of the edges", _0)]
    NotOnEdge(Location),

    /// The direction does not point into the grid from this edge box.
    #[display("The box at {location} cannot be rolled {direction}")]
    DirectionNotInward {
        /// Selected edge box.
        location: Location,
        /// Offending direction.
        direction: Direction,
    },

    /// Stage two picked a box that was not rolled this turn.
    #[display("The box at {} was not rolled during the first stage", _0)]
    NotPreviouslyMoved(Location),

    /// Stage one picked a fixed box.
    #[display("The box at {} is a fixed box and cannot be moved", _0)]
    UnmovableFixedBox(Location),

    /// The opened box held no tool.
    #[display("The box at {} is empty", _0)]
    EmptyBox(Location),

    /// The tool could not take effect.
    #[display("{}", _0)]
    Tool(ToolError),

    /// A postcondition failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl TurnError {
    /// Whether the player should simply be asked again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TurnError::NotOnEdge(_)
                | TurnError::DirectionNotInward { .. }
                | TurnError::NotPreviouslyMoved(_)
        )
    }
}

impl std::error::Error for TurnError {}

impl From<ToolError> for TurnError {
    fn from(err: ToolError) -> Self {
        TurnError::Tool(err)
    }
}

/// A transition that was refused, handing the unchanged stage back.
#[derive(Debug)]
pub struct Rejected<S> {
    /// The stage, exactly as it was.
    pub stage: S,
    /// Why the transition was refused.
    pub error: TurnError,
}

impl<S> Rejected<S> {
    pub(crate) fn new(stage: S, error: TurnError) -> Self {
        Self { stage, error }
    }

    /// Splits into the stage and the error.
    pub fn into_parts(self) -> (S, TurnError) {
        (self.stage, self.error)
    }
}
