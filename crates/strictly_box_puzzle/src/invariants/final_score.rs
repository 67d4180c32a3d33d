//! Invariants of a finished session.

use super::super::typestate::GameFinished;
use super::super::types::TURN_COUNT;
use super::Invariant;

/// Invariant: the reported score is the target count on the final grid.
pub struct ScoreMatchesGridInvariant;

impl Invariant<GameFinished> for ScoreMatchesGridInvariant {
    fn holds(game: &GameFinished) -> bool {
        game.score() == game.state().grid().count_top_letter(game.target())
    }

    fn description() -> &'static str {
        "Score equals the number of target letters on top faces"
    }
}

/// Invariant: exactly one report per turn, numbered in order.
pub struct CompleteHistoryInvariant;

impl Invariant<GameFinished> for CompleteHistoryInvariant {
    fn holds(game: &GameFinished) -> bool {
        let history = game.state().history();
        history.len() == TURN_COUNT as usize
            && history
                .iter()
                .enumerate()
                .all(|(i, report)| *report.number() as usize == i + 1)
    }

    fn description() -> &'static str {
        "History holds one report per turn in order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Direction, Faces, GameResult, GameSetup, Grid, Letter, Location, PuzzleBox, RollAction,
        RollResult, RollStage,
    };

    fn finished() -> GameFinished {
        // Every box is fixed, so each turn is wasted in the first stage.
        let grid = Grid::from_fn(|_| PuzzleBox::fixed(Faces::uniform(Letter::H)));
        let mut stage: RollStage = GameSetup::new(grid, Letter::H).start();
        let action = RollAction::new(Location::new(0, 3).unwrap(), Direction::Down);
        loop {
            let conclusion = match stage.roll(action) {
                Ok(RollResult::Wasted(conclusion)) => conclusion,
                other => panic!("Expected wasted turn, got {other:?}"),
            };
            match conclusion.into_parts().1 {
                GameResult::InProgress(next) => stage = next,
                GameResult::Finished(done) => return done,
            }
        }
    }

    #[test]
    fn test_finished_game_holds() {
        let game = finished();
        assert_eq!(game.score(), 64);
        assert!(ScoreMatchesGridInvariant::holds(&game));
        assert!(CompleteHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_tampered_score_violates() {
        let mut game = finished();
        game.score = 3;
        assert!(!ScoreMatchesGridInvariant::holds(&game));
    }
}
