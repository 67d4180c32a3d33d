//! Strictly Box Puzzle - type-safe box-rolling puzzle logic
//!
//! An 8×8 grid of lettered boxes is played over five turns. Each turn rolls
//! a line of boxes from the edge, opens one of them, and uses any tool found
//! inside. The score is the number of boxes showing the target letter on top.
//!
//! # Architecture
//!
//! - **Grid**: boxes, faces and the domino rules that move them
//! - **Tools**: stamps, flipper and fixer, applied to the grid
//! - **Typestate**: each half of a turn is its own type; transitions consume it
//! - **Contracts**: pre/postconditions and invariants guarding transitions
//! - **Driver**: retry loops over abstract prompt and render collaborators
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use strictly_box_puzzle::{GameSetup, TURN_COUNT};
//!
//! let setup = GameSetup::random(&mut StdRng::seed_from_u64(7));
//! let stage = setup.start();
//! assert_eq!(stage.state().turn_number(), 1);
//! assert_eq!(stage.state().turns_remaining(), TURN_COUNT - 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod driver;
mod faces;
mod generation;
mod grid;
mod invariants;
mod kani_support;
mod location;
mod phases;
mod puzzle_box;
mod rules;
mod snapshot;
mod tools;
mod typestate;
mod types;

pub use action::{EdgeSelection, Rejected, RollAction, TurnError};
pub use contracts::{
    CanRoll, Contract, InwardDirection, OnEdge, OpenContract, PreviouslyMoved, RollContract,
};
pub use driver::{Driver, GameEvent, InteractionError, Prompter, Renderer};
pub use faces::{Face, Faces, MAX_LETTER_REPEATS};
pub use generation::{kind_for_roll, random_box, tool_for_roll};
pub use grid::Grid;
pub use invariants::{
    CompleteHistoryInvariant, ContiguousPathInvariant, DominoParticipantsInvariant,
    FinishedInvariants, Invariant, InvariantSet, InvariantViolation, RollInvariants,
    ScoreMatchesGridInvariant, StartRolledFirstInvariant,
};
pub use location::{Location, LocationError};
pub use phases::{Stage, TurnOutcome, TurnReport};
pub use puzzle_box::{BoxKind, PuzzleBox};
pub use rules::{CornerChoices, DominoOutcome, EdgeDirection, propagate, resolve_edge_direction};
pub use snapshot::{CellSnapshot, FaceSnapshot, GameSummary, GridSnapshot};
pub use tools::{Tool, ToolError};
pub use typestate::{
    GameFinished, GameResult, GameSetup, GameState, OpenResult, OpenStage, RollResult, RollStage,
    ToolStage, TurnConclusion,
};
pub use types::{Direction, FACE_COUNT, GRID_SIZE, Letter, TURN_COUNT};
