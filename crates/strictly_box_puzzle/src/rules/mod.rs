//! Rolling rules for the box puzzle.
//!
//! Pure functions over locations and the grid, kept apart from the
//! turn engine so contracts and invariants can reuse them.

pub mod direction;
pub mod domino;

pub use direction::{CornerChoices, EdgeDirection, resolve_edge_direction};
pub use domino::{DominoOutcome, propagate};
