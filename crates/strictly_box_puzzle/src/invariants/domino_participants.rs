//! Only boxes that take part in the domino are moved.

use super::super::typestate::OpenStage;
use super::Invariant;

/// Invariant: every moved box allows the domino, and the blocker does not.
pub struct DominoParticipantsInvariant;

impl Invariant<OpenStage> for DominoParticipantsInvariant {
    fn holds(stage: &OpenStage) -> bool {
        let grid = stage.state().grid();
        let domino = stage.domino();
        let movers_ok = domino.moved.iter().all(|l| grid.get(*l).allows_domino());
        let blocker_ok = domino
            .stopped_by
            .is_none_or(|l| !grid.get(l).allows_domino());
        movers_ok && blocker_ok
    }

    fn description() -> &'static str {
        "Moved boxes allow the domino; the blocker does not"
    }
}
