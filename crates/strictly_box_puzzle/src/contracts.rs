//! Contract-based validation for turns.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{RollAction, TurnError};
use super::grid::Grid;
use super::invariants::{InvariantSet, RollInvariants};
use super::location::Location;
use super::rules::resolve_edge_direction;
use super::typestate::{OpenStage, RollStage};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for stage transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(action, after)} - must hold for the resulting stage
pub trait Contract<S, A> {
    /// The stage the transition produces.
    type Output;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), TurnError>;

    /// Checks postconditions after applying the action.
    fn post(action: &A, after: &Self::Output) -> Result<(), TurnError>;
}

// ─────────────────────────────────────────────────────────────
//  Roll Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the roll starts on the edge.
pub struct OnEdge;

impl OnEdge {
    /// Rejects interior locations.
    #[instrument]
    pub fn check(action: &RollAction) -> Result<(), TurnError> {
        if action.location.is_edge() {
            Ok(())
        } else {
            Err(TurnError::NotOnEdge(action.location))
        }
    }
}

/// Precondition: the direction points into the grid.
pub struct InwardDirection;

impl InwardDirection {
    /// Rejects directions the edge rule does not allow.
    #[instrument]
    pub fn check(action: &RollAction) -> Result<(), TurnError> {
        match resolve_edge_direction(action.location) {
            Some(rule) if rule.permits(action.direction) => Ok(()),
            Some(_) => Err(TurnError::DirectionNotInward {
                location: action.location,
                direction: action.direction,
            }),
            None => Err(TurnError::NotOnEdge(action.location)),
        }
    }
}

/// The chosen box can roll at all.
///
/// Not a precondition: failing it is a legal move that wastes the turn.
pub struct CanRoll;

impl CanRoll {
    /// Fails for fixed boxes.
    #[instrument(skip(grid))]
    pub fn check(action: &RollAction, grid: &Grid) -> Result<(), TurnError> {
        if grid.get(action.location).can_roll() {
            Ok(())
        } else {
            Err(TurnError::UnmovableFixedBox(action.location))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Roll Contract
// ─────────────────────────────────────────────────────────────

/// Contract for stage one.
///
/// Preconditions:
/// - Location is on the edge
/// - Direction is inward
///
/// Postconditions:
/// - The start box rolled first
/// - The moved path is contiguous and ends at the border or a blocker
/// - Every moved box takes part in the domino
pub struct RollContract;

impl Contract<RollStage, RollAction> for RollContract {
    type Output = OpenStage;

    fn pre(_stage: &RollStage, action: &RollAction) -> Result<(), TurnError> {
        OnEdge::check(action)?;
        InwardDirection::check(action)?;
        Ok(())
    }

    fn post(_action: &RollAction, after: &OpenStage) -> Result<(), TurnError> {
        RollInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            TurnError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Open Contract
// ─────────────────────────────────────────────────────────────

/// Precondition: the box was rolled during this turn's first stage.
pub struct PreviouslyMoved;

impl PreviouslyMoved {
    /// Rejects boxes outside the moved set.
    #[instrument(skip(stage))]
    pub fn check(location: Location, stage: &OpenStage) -> Result<(), TurnError> {
        if stage.was_moved(location) {
            Ok(())
        } else {
            Err(TurnError::NotPreviouslyMoved(location))
        }
    }
}

/// Contract for stage two.
///
/// Preconditions:
/// - Box was moved this turn
///
/// Postconditions:
/// - Box is opened and holds no tool
pub struct OpenContract;

impl Contract<OpenStage, Location> for OpenContract {
    type Output = Grid;

    fn pre(stage: &OpenStage, location: &Location) -> Result<(), TurnError> {
        PreviouslyMoved::check(*location, stage)
    }

    fn post(location: &Location, after: &Grid) -> Result<(), TurnError> {
        let b = after.get(*location);
        if b.is_opened() && b.is_empty() && b.tool().is_none() {
            Ok(())
        } else {
            Err(TurnError::InvariantViolation(format!(
                "Postcondition failed: box at {} was not emptied",
                location
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Faces, GameSetup, Letter, PuzzleBox, RollResult, Tool};

    fn loc(row: usize, col: usize) -> Location {
        Location::new(row, col).unwrap()
    }

    fn stage() -> RollStage {
        let faces = Faces::uniform(Letter::A);
        let mut grid = Grid::from_fn(|_| PuzzleBox::regular(faces, Some(Tool::BoxFlipper)));
        grid.replace(loc(0, 5), PuzzleBox::fixed(faces));
        GameSetup::new(grid, Letter::A).start()
    }

    fn rolled(stage: RollStage, action: RollAction) -> OpenStage {
        match stage.roll(action) {
            Ok(RollResult::Rolled(open)) => open,
            other => panic!("Expected rolled stage, got {other:?}"),
        }
    }

    #[test]
    fn test_precondition_edge_location() {
        let stage = stage();
        assert!(RollContract::pre(&stage, &RollAction::new(loc(0, 3), Direction::Down)).is_ok());
        assert!(matches!(
            RollContract::pre(&stage, &RollAction::new(loc(3, 3), Direction::Down)),
            Err(TurnError::NotOnEdge(_))
        ));
    }

    #[test]
    fn test_precondition_outward_direction() {
        let stage = stage();
        assert!(matches!(
            RollContract::pre(&stage, &RollAction::new(loc(0, 3), Direction::Up)),
            Err(TurnError::DirectionNotInward { .. })
        ));
        assert!(matches!(
            RollContract::pre(&stage, &RollAction::new(loc(7, 0), Direction::Down)),
            Err(TurnError::DirectionNotInward { .. })
        ));
    }

    #[test]
    fn test_fixed_box_cannot_roll() {
        let stage = stage();
        let action = RollAction::new(loc(0, 5), Direction::Down);
        assert!(RollContract::pre(&stage, &action).is_ok());
        assert_eq!(
            CanRoll::check(&action, stage.state().grid()),
            Err(TurnError::UnmovableFixedBox(loc(0, 5)))
        );
    }

    #[test]
    fn test_postcondition_holds_after_roll() {
        let action = RollAction::new(loc(7, 2), Direction::Up);
        let open = rolled(stage(), action);
        assert!(RollContract::post(&action, &open).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let action = RollAction::new(loc(7, 2), Direction::Up);
        let mut open = rolled(stage(), action);
        open.domino.moved.swap(1, 2);
        assert!(matches!(
            RollContract::post(&action, &open),
            Err(TurnError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_open_requires_moved_box() {
        let open = rolled(stage(), RollAction::new(loc(0, 1), Direction::Down));
        assert!(OpenContract::pre(&open, &loc(4, 1)).is_ok());
        assert_eq!(
            OpenContract::pre(&open, &loc(4, 2)),
            Err(TurnError::NotPreviouslyMoved(loc(4, 2)))
        );
    }

    #[test]
    fn test_open_postcondition() {
        let mut grid =
            Grid::from_fn(|_| PuzzleBox::regular(Faces::uniform(Letter::B), Some(Tool::BoxFixer)));
        assert!(OpenContract::post(&loc(2, 2), &grid).is_err());
        grid.get_mut(loc(2, 2)).open();
        assert!(OpenContract::post(&loc(2, 2), &grid).is_ok());
    }
}
