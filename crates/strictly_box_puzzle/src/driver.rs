//! Interactive loop over abstract prompt and render collaborators.
//!
//! The driver owns every retry: bad input re-prompts inside an explicit
//! loop, and rejected transitions hand the stage back so nothing is
//! applied twice.

use super::action::{RollAction, TurnError};
use super::location::{Location, LocationError};
use super::phases::{Stage, TurnOutcome};
use super::rules::{CornerChoices, EdgeDirection};
use super::snapshot::{FaceSnapshot, GameSummary, GridSnapshot};
use super::tools::Tool;
use super::typestate::{
    GameFinished, GameResult, GameSetup, GameState, OpenResult, RollResult, RollStage,
    TurnConclusion,
};
use super::types::{Direction, Letter};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Collaborator I/O failure, with the caller's location.
#[derive(Debug, Clone, Display, Error)]
#[display("Interaction error: {} at {}:{}", message, file, line)]
pub struct InteractionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InteractionError {
    /// Creates a new interaction error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for InteractionError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Source of player input.
pub trait Prompter {
    /// Reads a raw location string after showing `message`.
    fn coordinate(&mut self, message: &str) -> Result<String, InteractionError>;

    /// Asks a yes/no question.
    fn yes_no(&mut self, message: &str) -> Result<bool, InteractionError>;

    /// Picks one of the two inward directions at a corner.
    fn direction(&mut self, choices: &CornerChoices) -> Result<Direction, InteractionError>;
}

/// Sink for everything the player sees.
pub trait Renderer {
    /// Shows the whole grid.
    fn grid(&mut self, grid: &GridSnapshot) -> Result<(), InteractionError>;

    /// Shows the six faces of one box.
    fn faces(&mut self, faces: &FaceSnapshot) -> Result<(), InteractionError>;

    /// Reports a state change or a rejected input.
    fn event(&mut self, event: &GameEvent) -> Result<(), InteractionError>;

    /// Shows the final result.
    fn score(&mut self, summary: &GameSummary) -> Result<(), InteractionError>;
}

/// Something that happened during play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Session started.
    Welcome {
        /// Letter to collect.
        target: Letter,
    },
    /// A new turn began.
    TurnStarted {
        /// 1-based turn number.
        number: u8,
        /// Turns left after this one.
        remaining: u8,
    },
    /// A stage of the current turn began.
    StageStarted(Stage),
    /// Input could not be read as a location.
    InvalidLocation(LocationError),
    /// A well-formed input was refused; the player is asked again.
    Rejected(TurnError),
    /// Boxes rolled.
    Rolled {
        /// The roll performed.
        action: RollAction,
        /// Rolled locations in path order.
        moved: Vec<Location>,
        /// Box that halted the domino early.
        stopped_by: Option<Location>,
    },
    /// The turn ended without a tool taking effect.
    TurnWasted(TurnError),
    /// The opened box held a tool.
    ToolFound {
        /// Where it was found.
        location: Location,
        /// What was found.
        tool: Tool,
    },
    /// The tool took effect.
    ToolApplied {
        /// Tool used.
        tool: Tool,
        /// Where it was aimed.
        target: Location,
        /// Locations it changed.
        touched: Vec<Location>,
    },
    /// The tool could not take effect.
    ToolFailed {
        /// Tool used.
        tool: Tool,
        /// Why it failed.
        error: TurnError,
    },
}

/// Plays a whole session against a prompter and a renderer.
#[derive(Debug)]
pub struct Driver<P, R> {
    prompter: P,
    renderer: R,
    show_initial_grid: bool,
}

impl<P: Prompter, R: Renderer> Driver<P, R> {
    /// Creates a driver that shows the grid before the first turn.
    pub fn new(prompter: P, renderer: R) -> Self {
        Self {
            prompter,
            renderer,
            show_initial_grid: true,
        }
    }

    /// Sets whether the grid is shown before the first turn.
    pub fn with_initial_grid(mut self, show: bool) -> Self {
        self.show_initial_grid = show;
        self
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consumes the driver, returning its collaborators.
    pub fn into_parts(self) -> (P, R) {
        (self.prompter, self.renderer)
    }

    /// Plays every turn and reports the score.
    ///
    /// Only collaborator failures end the session early.
    #[instrument(skip_all, fields(target_letter = %setup.state().target()))]
    pub fn play(&mut self, setup: GameSetup) -> Result<GameFinished, InteractionError> {
        self.renderer.event(&GameEvent::Welcome {
            target: setup.state().target(),
        })?;
        if self.show_initial_grid {
            self.renderer.grid(&setup.state().grid().snapshot())?;
        }

        let mut stage = setup.start();
        loop {
            self.renderer.event(&GameEvent::TurnStarted {
                number: stage.state().turn_number(),
                remaining: stage.state().turns_remaining(),
            })?;
            self.offer_faces(stage.state())?;

            let (report, game) = self.play_turn(stage)?.into_parts();
            debug!(turn = report.number(), "Turn recorded");

            match game {
                GameResult::InProgress(next) => stage = next,
                GameResult::Finished(done) => {
                    info!(score = done.score(), "Session complete");
                    self.renderer.score(&done.summary())?;
                    return Ok(done);
                }
            }
        }
    }

    /// Lets the player inspect one box before rolling.
    fn offer_faces(&mut self, state: &GameState) -> Result<(), InteractionError> {
        if !self
            .prompter
            .yes_no("Do you want to view all surfaces of a box?")?
        {
            return Ok(());
        }
        let location =
            self.read_location("Please enter the location of the box you want to view: ")?;
        self.renderer.faces(&state.grid().faces_at(location))
    }

    /// Re-prompts until the input names a location on the grid.
    fn read_location(&mut self, message: &str) -> Result<Location, InteractionError> {
        loop {
            let input = self.prompter.coordinate(message)?;
            match Location::parse(&input) {
                Ok(location) => return Ok(location),
                Err(e) => {
                    warn!(input = %input, error = %e, "Unreadable location");
                    self.renderer.event(&GameEvent::InvalidLocation(e))?;
                }
            }
        }
    }

    /// Tells the renderer about a refused input.
    fn reject(&mut self, error: TurnError) -> Result<(), InteractionError> {
        debug!(%error, "Re-prompting");
        self.renderer.event(&GameEvent::Rejected(error))
    }

    /// Reads an edge box and, at a corner, a direction.
    fn read_roll(&mut self, stage: &RollStage) -> Result<RollAction, InteractionError> {
        loop {
            let location =
                self.read_location("Please enter the location of the edge box you want to roll: ")?;
            let selection = match stage.select_edge(location) {
                Ok(selection) => selection,
                Err(e) => {
                    self.reject(e)?;
                    continue;
                }
            };
            let direction = match selection.rule() {
                EdgeDirection::Forced(direction) => direction,
                EdgeDirection::Corner(choices) => self.prompter.direction(&choices)?,
            };
            match selection.with_direction(direction) {
                Ok(action) => return Ok(action),
                Err(e) => self.reject(e)?,
            }
        }
    }

    /// Plays both stages of one turn.
    #[instrument(skip_all, fields(turn = stage.state().turn_number()))]
    fn play_turn(&mut self, stage: RollStage) -> Result<TurnConclusion, InteractionError> {
        self.renderer.event(&GameEvent::StageStarted(Stage::Roll))?;

        let mut stage = stage;
        let mut open = loop {
            let action = self.read_roll(&stage)?;
            match stage.roll(action) {
                Ok(RollResult::Rolled(open)) => break open,
                Ok(RollResult::Wasted(conclusion)) => {
                    self.report_wasted(&conclusion)?;
                    return Ok(conclusion);
                }
                Err(rejected) => {
                    let (back, error) = rejected.into_parts();
                    stage = back;
                    self.reject(error)?;
                }
            }
        };

        self.renderer.event(&GameEvent::Rolled {
            action: open.roll(),
            moved: open.moved().to_vec(),
            stopped_by: open.domino().stopped_by,
        })?;
        self.renderer.grid(&open.state().grid().snapshot())?;
        self.renderer.event(&GameEvent::StageStarted(Stage::Open))?;

        let found = loop {
            let location =
                self.read_location("Please enter the location of the box you want to open: ")?;
            match open.open(location) {
                Ok(OpenResult::Tool(found)) => break found,
                Ok(OpenResult::Empty(conclusion)) => {
                    self.report_wasted(&conclusion)?;
                    return Ok(conclusion);
                }
                Err(rejected) => {
                    let (back, error) = rejected.into_parts();
                    open = back;
                    self.reject(error)?;
                }
            }
        };

        let tool = found.tool();
        self.renderer.event(&GameEvent::ToolFound {
            location: found.opened(),
            tool,
        })?;
        let target = self.read_location("Please enter location to use the tool: ")?;
        let conclusion = found.apply(target);

        let event = match conclusion.report().outcome() {
            TurnOutcome::ToolApplied { target, touched } => GameEvent::ToolApplied {
                tool,
                target: *target,
                touched: touched.clone(),
            },
            TurnOutcome::Wasted(error) => GameEvent::ToolFailed {
                tool,
                error: error.clone(),
            },
        };
        self.renderer.event(&event)?;
        self.renderer.grid(&conclusion.game().state().grid().snapshot())?;
        Ok(conclusion)
    }

    fn report_wasted(&mut self, conclusion: &TurnConclusion) -> Result<(), InteractionError> {
        match conclusion.report().outcome().error() {
            Some(error) => self.renderer.event(&GameEvent::TurnWasted(error.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Faces, Grid, PuzzleBox};
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Script {
        coordinates: VecDeque<&'static str>,
    }

    impl Prompter for Script {
        fn coordinate(&mut self, _message: &str) -> Result<String, InteractionError> {
            self.coordinates
                .pop_front()
                .map(str::to_string)
                .ok_or_else(|| InteractionError::new("script exhausted"))
        }

        fn yes_no(&mut self, _message: &str) -> Result<bool, InteractionError> {
            Ok(false)
        }

        fn direction(&mut self, choices: &CornerChoices) -> Result<Direction, InteractionError> {
            Ok(choices.horizontal())
        }
    }

    #[derive(Default)]
    struct Events(Vec<GameEvent>);

    impl Renderer for Events {
        fn grid(&mut self, _grid: &GridSnapshot) -> Result<(), InteractionError> {
            Ok(())
        }

        fn faces(&mut self, _faces: &FaceSnapshot) -> Result<(), InteractionError> {
            Ok(())
        }

        fn event(&mut self, event: &GameEvent) -> Result<(), InteractionError> {
            self.0.push(event.clone());
            Ok(())
        }

        fn score(&mut self, _summary: &GameSummary) -> Result<(), InteractionError> {
            Ok(())
        }
    }

    fn driver(inputs: &[&'static str]) -> Driver<Script, Events> {
        let script = Script {
            coordinates: inputs.iter().copied().collect(),
        };
        Driver::new(script, Events::default())
    }

    #[test]
    fn test_read_location_reprompts_on_bad_input() {
        let mut driver = driver(&["R2C4", "R9-C1", "r2-c4"]);
        let location = driver.read_location("where?").unwrap();
        assert_eq!(location, Location::new(1, 3).unwrap());
        let invalid = driver
            .renderer()
            .0
            .iter()
            .filter(|e| matches!(e, GameEvent::InvalidLocation(_)))
            .count();
        assert_eq!(invalid, 2);
    }

    #[test]
    fn test_exhausted_prompter_aborts_play() {
        let grid = Grid::from_fn(|_| PuzzleBox::regular(Faces::uniform(Letter::A), None));
        let mut driver = driver(&["4-4"]);
        let err = driver.play(GameSetup::new(grid, Letter::A)).unwrap_err();
        assert!(err.message.contains("script exhausted"));
        assert!(
            driver
                .renderer()
                .0
                .contains(&GameEvent::Rejected(TurnError::NotOnEdge(Location::new(3, 3).unwrap())))
        );
    }
}
