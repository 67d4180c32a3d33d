//! Shape of the moved path after a roll.

use super::super::typestate::OpenStage;
use super::Invariant;

/// Invariant: the chosen edge box is the first one rolled.
pub struct StartRolledFirstInvariant;

impl Invariant<OpenStage> for StartRolledFirstInvariant {
    fn holds(stage: &OpenStage) -> bool {
        let roll = stage.roll();
        let domino = stage.domino();
        domino.start == roll.location
            && domino.direction == roll.direction
            && domino.moved.first() == Some(&roll.location)
    }

    fn description() -> &'static str {
        "The selected edge box rolls first"
    }
}

/// Invariant: moved boxes form an unbroken line in the roll direction.
///
/// The line ends at the border, or right before the recorded blocker.
pub struct ContiguousPathInvariant;

impl Invariant<OpenStage> for ContiguousPathInvariant {
    fn holds(stage: &OpenStage) -> bool {
        let domino = stage.domino();
        let Some(last) = domino.moved.last() else {
            return false;
        };
        let unbroken = domino
            .moved
            .windows(2)
            .all(|pair| pair[0].step(domino.direction) == Some(pair[1]));
        unbroken && last.step(domino.direction) == domino.stopped_by
    }

    fn description() -> &'static str {
        "Moved boxes are contiguous and end at the border or a blocker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Direction, Faces, GameSetup, Grid, Letter, Location, PuzzleBox, RollAction, RollResult,
    };

    fn loc(row: usize, col: usize) -> Location {
        Location::new(row, col).unwrap()
    }

    fn rolled(grid: Grid, action: RollAction) -> OpenStage {
        match GameSetup::new(grid, Letter::A).start().roll(action) {
            Ok(RollResult::Rolled(open)) => open,
            other => panic!("Expected rolled stage, got {other:?}"),
        }
    }

    fn regular_grid() -> Grid {
        Grid::from_fn(|_| PuzzleBox::regular(Faces::uniform(Letter::A), None))
    }

    #[test]
    fn test_full_line_holds() {
        let open = rolled(regular_grid(), RollAction::new(loc(0, 6), Direction::Down));
        assert!(StartRolledFirstInvariant::holds(&open));
        assert!(ContiguousPathInvariant::holds(&open));
    }

    #[test]
    fn test_blocked_line_holds() {
        let mut grid = regular_grid();
        grid.replace(loc(5, 6), PuzzleBox::fixed(Faces::uniform(Letter::A)));
        let open = rolled(grid, RollAction::new(loc(0, 6), Direction::Down));
        assert_eq!(open.moved().len(), 5);
        assert!(ContiguousPathInvariant::holds(&open));
    }

    #[test]
    fn test_gap_violates() {
        let mut open = rolled(regular_grid(), RollAction::new(loc(0, 6), Direction::Down));
        open.domino.moved.remove(3);
        assert!(!ContiguousPathInvariant::holds(&open));
    }

    #[test]
    fn test_missing_blocker_violates() {
        let mut open = rolled(regular_grid(), RollAction::new(loc(0, 6), Direction::Down));
        open.domino.moved.truncate(4);
        assert!(!ContiguousPathInvariant::holds(&open));
    }

    #[test]
    fn test_wrong_start_violates() {
        let mut open = rolled(regular_grid(), RollAction::new(loc(0, 6), Direction::Down));
        open.domino.start = loc(0, 5);
        assert!(!StartRolledFirstInvariant::holds(&open));
    }
}
