//! Serializable read-only views for renderers and reports.
//!
//! Stage types own the live grid and cannot be handed out freely, so
//! renderers get these plain copies instead.

use super::faces::{Face, Faces};
use super::location::Location;
use super::phases::TurnReport;
use super::puzzle_box::{BoxKind, PuzzleBox};
use super::types::{GRID_SIZE, Letter};
use serde::{Deserialize, Serialize};

/// Display view of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    kind: BoxKind,
    top: Letter,
    opened: bool,
    empty: bool,
}

impl CellSnapshot {
    /// Captures the displayable state of a box.
    pub fn of(b: &PuzzleBox) -> Self {
        Self {
            kind: b.kind(),
            top: b.top_face(),
            opened: b.is_opened(),
            empty: b.is_empty(),
        }
    }

    /// Box kind.
    pub fn kind(&self) -> BoxKind {
        self.kind
    }

    /// Top letter.
    pub fn top(&self) -> Letter {
        self.top
    }

    /// Whether the box has been opened.
    pub fn opened(&self) -> bool {
        self.opened
    }

    /// `R`, `U` or `X`.
    pub fn kind_marker(&self) -> char {
        self.kind.marker()
    }

    /// `O` when empty, `M` otherwise.
    pub fn status_marker(&self) -> char {
        if self.empty { 'O' } else { 'M' }
    }
}

/// Display view of the whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    cells: [[CellSnapshot; GRID_SIZE]; GRID_SIZE],
}

impl GridSnapshot {
    pub(crate) fn new(cells: [[CellSnapshot; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Cell at `loc`.
    pub fn cell(&self, loc: Location) -> &CellSnapshot {
        &self.cells[loc.row()][loc.col()]
    }

    /// Rows in order.
    pub fn rows(&self) -> &[[CellSnapshot; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }
}

/// All six faces of one box, for the surface diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceSnapshot {
    location: Location,
    faces: Faces,
}

impl FaceSnapshot {
    pub(crate) fn new(location: Location, faces: Faces) -> Self {
        Self { location, faces }
    }

    /// Where the box sits.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Letter on `face`.
    pub fn get(&self, face: Face) -> Letter {
        self.faces.get(face)
    }

    /// Letters in face-index order.
    pub fn letters(&self) -> &[Letter; 6] {
        self.faces.letters()
    }
}

/// End-of-game report: target, score, turn history and final grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GameSummary {
    /// Letter the player was collecting.
    target: Letter,
    /// Boxes showing the target on top.
    score: usize,
    /// One report per turn played.
    turns: Vec<TurnReport>,
    /// Grid as it stood at the end.
    grid: GridSnapshot,
}

impl GameSummary {
    pub(crate) fn new(
        target: Letter,
        score: usize,
        turns: Vec<TurnReport>,
        grid: GridSnapshot,
    ) -> Self {
        Self {
            target,
            score,
            turns,
            grid,
        }
    }
}
