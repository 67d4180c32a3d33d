//! Turn outcomes and per-turn reports.

use super::action::{RollAction, TurnError};
use super::location::Location;
use super::tools::Tool;
use serde::{Deserialize, Serialize};

/// Which half of a turn is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Stage {
    /// Pick and roll an edge box.
    #[display("FIRST STAGE")]
    Roll,
    /// Open a rolled box and use its tool.
    #[display("SECOND STAGE")]
    Open,
}

/// How a turn ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A tool took effect on the listed locations.
    ToolApplied {
        /// Where the tool was aimed.
        target: Location,
        /// Locations the effect touched.
        touched: Vec<Location>,
    },
    /// The turn, or its tool step, was wasted.
    Wasted(TurnError),
}

impl TurnOutcome {
    /// Returns true if the turn was wasted.
    pub fn is_wasted(&self) -> bool {
        matches!(self, TurnOutcome::Wasted(_))
    }

    /// The error that wasted the turn, if any.
    pub fn error(&self) -> Option<&TurnError> {
        match self {
            TurnOutcome::Wasted(e) => Some(e),
            TurnOutcome::ToolApplied { .. } => None,
        }
    }
}

/// Record of one completed turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TurnReport {
    /// 1-based turn number.
    number: u8,
    /// The roll that was attempted.
    roll: RollAction,
    /// Locations rolled this turn, in path order.
    moved: Vec<Location>,
    /// Box that stopped the domino early.
    stopped_by: Option<Location>,
    /// Box opened in stage two.
    opened: Option<Location>,
    /// Tool found in the opened box.
    tool: Option<Tool>,
    /// How the turn ended.
    outcome: TurnOutcome,
}

impl TurnReport {
    /// A turn that ended in stage one because the chosen box could not roll.
    pub(crate) fn unmovable(number: u8, roll: RollAction) -> Self {
        Self {
            number,
            roll,
            moved: Vec::new(),
            stopped_by: None,
            opened: None,
            tool: None,
            outcome: TurnOutcome::Wasted(TurnError::UnmovableFixedBox(roll.location)),
        }
    }

    /// A turn that reached stage two.
    pub(crate) fn reached_open(
        number: u8,
        roll: RollAction,
        moved: Vec<Location>,
        stopped_by: Option<Location>,
        opened: Location,
        tool: Option<Tool>,
        outcome: TurnOutcome,
    ) -> Self {
        Self {
            number,
            roll,
            moved,
            stopped_by,
            opened: Some(opened),
            tool,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_report_exposes_opened_box() {
        let start = Location::new(0, 2).unwrap();
        let below = Location::new(1, 2).unwrap();
        let roll = RollAction::new(start, Direction::Down);
        let report = TurnReport::reached_open(
            3,
            roll,
            vec![start, below],
            None,
            below,
            None,
            TurnOutcome::Wasted(TurnError::EmptyBox(below)),
        );

        assert_eq!(report.opened(), &Some(below));
        assert_eq!(report.moved(), &vec![start, below]);
        assert!(report.outcome().is_wasted());
    }

    #[test]
    fn test_unmovable_report_has_no_opened_box() {
        let start = Location::new(7, 4).unwrap();
        let report = TurnReport::unmovable(1, RollAction::new(start, Direction::Up));
        assert_eq!(report.opened(), &None);
        assert!(report.moved().is_empty());
        assert_eq!(
            report.outcome().error(),
            Some(&TurnError::UnmovableFixedBox(start))
        );
    }
}
