//! Phase-specific typestate structs for a puzzle session.
//!
//! Each stage of a turn is its own type, and every transition consumes
//! the stage it starts from. The moved set only exists inside
//! [`OpenStage`] and [`ToolStage`], so it cannot outlive its turn.
//! Refused transitions hand the untouched stage back in [`Rejected`].

use super::action::{EdgeSelection, Rejected, RollAction, TurnError};
use super::contracts::{CanRoll, Contract, OpenContract, RollContract};
use super::grid::Grid;
#[cfg(debug_assertions)]
use super::invariants::{FinishedInvariants, InvariantSet};
use super::location::Location;
use super::phases::{TurnOutcome, TurnReport};
use super::rules::{DominoOutcome, propagate, resolve_edge_direction};
use super::snapshot::GameSummary;
use super::tools::Tool;
use super::types::{Letter, TURN_COUNT};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Shared state
// ─────────────────────────────────────────────────────────────

/// State carried through every phase: grid, target and history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid: Grid,
    target: Letter,
    history: Vec<TurnReport>,
}

impl GameState {
    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the target letter.
    pub fn target(&self) -> Letter {
        self.target
    }

    /// Reports of completed turns.
    pub fn history(&self) -> &[TurnReport] {
        &self.history
    }

    /// Number of the turn being played (1-based).
    pub fn turn_number(&self) -> u8 {
        self.history.len() as u8 + 1
    }

    /// Turns left after the current one.
    pub fn turns_remaining(&self) -> u8 {
        TURN_COUNT.saturating_sub(self.turn_number())
    }

    /// Current count of boxes showing the target on top.
    pub fn score(&self) -> usize {
        self.grid.count_top_letter(self.target)
    }

    /// Records a finished turn and moves to the next phase.
    fn conclude(mut self, report: TurnReport) -> TurnConclusion {
        info!(
            turn = report.number(),
            wasted = report.outcome().is_wasted(),
            "Turn concluded"
        );
        self.history.push(report.clone());
        let game = if self.history.len() >= TURN_COUNT as usize {
            GameResult::Finished(GameFinished::new(self))
        } else {
            GameResult::InProgress(RollStage { state: self })
        };
        TurnConclusion { report, game }
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Session ready to start: grid generated, target chosen.
#[derive(Debug, Clone)]
pub struct GameSetup {
    state: GameState,
}

impl GameSetup {
    /// Creates a session over a given grid and target.
    #[instrument(skip(grid))]
    pub fn new(grid: Grid, target: Letter) -> Self {
        Self {
            state: GameState {
                grid,
                target,
                history: Vec::new(),
            },
        }
    }

    /// Generates a random grid and a uniformly chosen target.
    #[instrument(skip(rng))]
    pub fn random(rng: &mut impl Rng) -> Self {
        let grid = Grid::random(rng);
        let target = Letter::random(rng);
        info!(%target, "New puzzle generated");
        Self::new(grid, target)
    }

    /// Returns the shared state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Starts turn one.
    #[instrument(skip(self))]
    pub fn start(self) -> RollStage {
        RollStage { state: self.state }
    }
}

// ─────────────────────────────────────────────────────────────
//  Roll stage (first half of a turn)
// ─────────────────────────────────────────────────────────────

/// Waiting for an edge box to roll.
#[derive(Debug, Clone)]
pub struct RollStage {
    pub(crate) state: GameState,
}

/// Result of a roll.
#[derive(Debug)]
pub enum RollResult {
    /// Boxes moved; the player may open one.
    Rolled(OpenStage),
    /// The chosen box could not roll; the turn is over.
    Wasted(TurnConclusion),
}

impl RollStage {
    /// Returns the shared state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Checks that `location` is on the edge and resolves its direction rule.
    #[instrument(skip(self))]
    pub fn select_edge(&self, location: Location) -> Result<EdgeSelection, TurnError> {
        resolve_edge_direction(location)
            .map(|rule| EdgeSelection::new(location, rule))
            .ok_or(TurnError::NotOnEdge(location))
    }

    /// Rolls the chosen edge box and everything the domino reaches.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always; failures return the stage unchanged
    /// - A fixed start box wastes the turn without touching the grid
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(turn = self.state.turn_number()))]
    pub fn roll(self, action: RollAction) -> Result<RollResult, Rejected<Self>> {
        if let Err(error) = RollContract::pre(&self, &action) {
            warn!(%error, "Roll rejected");
            return Err(Rejected::new(self, error));
        }

        let turn = self.state.turn_number();
        if let Err(error) = CanRoll::check(&action, &self.state.grid) {
            info!(%error, "Turn wasted in first stage");
            return Ok(RollResult::Wasted(
                self.state.conclude(TurnReport::unmovable(turn, action)),
            ));
        }

        let mut state = self.state;
        let domino = propagate(&mut state.grid, action.location, action.direction);
        debug!(moved = domino.moved.len(), stopped_by = ?domino.stopped_by, "Boxes rolled");

        let stage = OpenStage {
            state,
            turn,
            roll: action,
            domino,
        };

        #[cfg(debug_assertions)]
        {
            let post = RollContract::post(&action, &stage);
            debug_assert!(post.is_ok(), "{post:?}");
        }

        Ok(RollResult::Rolled(stage))
    }
}

// ─────────────────────────────────────────────────────────────
//  Open stage (second half of a turn)
// ─────────────────────────────────────────────────────────────

/// Boxes have rolled; waiting for one of them to be opened.
#[derive(Debug, Clone)]
pub struct OpenStage {
    pub(crate) state: GameState,
    pub(crate) turn: u8,
    pub(crate) roll: RollAction,
    pub(crate) domino: DominoOutcome,
}

/// Result of opening a box.
#[derive(Debug)]
pub enum OpenResult {
    /// The box was empty; the turn is over.
    Empty(TurnConclusion),
    /// A tool was found and must be aimed.
    Tool(ToolStage),
}

impl OpenStage {
    /// Returns the shared state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The roll that started this turn.
    pub fn roll(&self) -> RollAction {
        self.roll
    }

    /// What the domino did.
    pub fn domino(&self) -> &DominoOutcome {
        &self.domino
    }

    /// Locations rolled this turn.
    pub fn moved(&self) -> &[Location] {
        &self.domino.moved
    }

    /// Whether `location` was rolled this turn.
    pub fn was_moved(&self, location: Location) -> bool {
        self.domino.moved.contains(&location)
    }

    /// Opens a box rolled this turn and takes its tool.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn open(self, location: Location) -> Result<OpenResult, Rejected<Self>> {
        if let Err(error) = OpenContract::pre(&self, &location) {
            warn!(%error, "Open rejected");
            return Err(Rejected::new(self, error));
        }

        let Self {
            mut state,
            turn,
            roll,
            domino,
        } = self;
        let tool = state.grid.get_mut(location).open();

        #[cfg(debug_assertions)]
        {
            let post = OpenContract::post(&location, &state.grid);
            debug_assert!(post.is_ok(), "{post:?}");
        }

        match tool {
            None => {
                info!(%location, "Opened an empty box");
                let report = TurnReport::reached_open(
                    turn,
                    roll,
                    domino.moved,
                    domino.stopped_by,
                    location,
                    None,
                    TurnOutcome::Wasted(TurnError::EmptyBox(location)),
                );
                Ok(OpenResult::Empty(state.conclude(report)))
            }
            Some(tool) => {
                info!(%location, %tool, "Found a tool");
                Ok(OpenResult::Tool(ToolStage {
                    state,
                    turn,
                    roll,
                    domino,
                    opened: location,
                    tool,
                }))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Tool stage
// ─────────────────────────────────────────────────────────────

/// A tool is in hand and must be used immediately.
#[derive(Debug, Clone)]
pub struct ToolStage {
    state: GameState,
    turn: u8,
    roll: RollAction,
    domino: DominoOutcome,
    opened: Location,
    tool: Tool,
}

impl ToolStage {
    /// Returns the shared state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The tool in hand.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Where the tool came from.
    pub fn opened(&self) -> Location {
        self.opened
    }

    /// Uses the tool at `target` with the session's target letter.
    ///
    /// A tool that cannot take effect is recorded in the report; the roll
    /// and the tool's removal stand either way.
    #[instrument(skip(self), fields(turn = self.turn, tool = %self.tool))]
    pub fn apply(self, target: Location) -> TurnConclusion {
        let Self {
            mut state,
            turn,
            roll,
            domino,
            opened,
            tool,
        } = self;
        let letter = state.target;
        let outcome = match tool.apply(&mut state.grid, target, letter) {
            Ok(touched) => TurnOutcome::ToolApplied { target, touched },
            Err(e) => TurnOutcome::Wasted(e.into()),
        };
        let report = TurnReport::reached_open(
            turn,
            roll,
            domino.moved,
            domino.stopped_by,
            opened,
            Some(tool),
            outcome,
        );
        state.conclude(report)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Session over after the last turn. The score is always available.
#[derive(Debug, Clone)]
pub struct GameFinished {
    state: GameState,
    pub(crate) score: usize,
}

impl GameFinished {
    fn new(state: GameState) -> Self {
        let score = state.score();
        info!(target_letter = %state.target, score, "Game finished");
        let game = Self { state, score };

        #[cfg(debug_assertions)]
        {
            let check = FinishedInvariants::check_all(&game);
            debug_assert!(check.is_ok(), "{check:?}");
        }

        game
    }

    /// Returns the shared state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Boxes showing the target letter on top.
    pub fn score(&self) -> usize {
        self.score
    }

    /// The target letter.
    pub fn target(&self) -> Letter {
        self.state.target
    }

    /// Serializable end-of-game report.
    pub fn summary(&self) -> GameSummary {
        GameSummary::new(
            self.state.target,
            self.score,
            self.state.history.clone(),
            self.state.grid.snapshot(),
        )
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition results
// ─────────────────────────────────────────────────────────────

/// Where the session stands after a turn.
#[derive(Debug)]
pub enum GameResult {
    /// More turns to play.
    InProgress(RollStage),
    /// All turns played.
    Finished(GameFinished),
}

impl GameResult {
    /// Shared state of whichever phase comes next.
    pub fn state(&self) -> &GameState {
        match self {
            GameResult::InProgress(stage) => stage.state(),
            GameResult::Finished(game) => game.state(),
        }
    }
}

/// A concluded turn: its report and the next phase.
#[derive(Debug)]
pub struct TurnConclusion {
    report: TurnReport,
    game: GameResult,
}

impl TurnConclusion {
    /// The turn's report.
    pub fn report(&self) -> &TurnReport {
        &self.report
    }

    /// The next phase.
    pub fn game(&self) -> &GameResult {
        &self.game
    }

    /// Splits into report and next phase.
    pub fn into_parts(self) -> (TurnReport, GameResult) {
        (self.report, self.game)
    }
}
