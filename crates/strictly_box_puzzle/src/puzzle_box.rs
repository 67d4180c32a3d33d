//! Boxes on the grid and the behavior table for each box kind.

use super::faces::Faces;
use super::tools::Tool;
use super::types::{Direction, Letter};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Kind of box. Decides rolling, domino and stamping behavior.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum BoxKind {
    /// Rolls, passes the domino on, accepts stamps.
    Regular,
    /// Rolls and passes the domino on, but ignores stamps.
    Unchanging,
    /// Never rolls, blocks the domino, ignores stamps, never holds a tool.
    Fixed,
}

impl BoxKind {
    /// Whether a box of this kind may be rolled by the player.
    pub fn can_roll(self) -> bool {
        !matches!(self, BoxKind::Fixed)
    }

    /// Whether a moving chain may pass through a box of this kind.
    pub fn allows_domino(self) -> bool {
        !matches!(self, BoxKind::Fixed)
    }

    /// Whether stamping changes the top face.
    pub fn accepts_stamp(self) -> bool {
        matches!(self, BoxKind::Regular)
    }

    /// Single-character marker used in grid listings.
    pub fn marker(self) -> char {
        match self {
            BoxKind::Regular => 'R',
            BoxKind::Unchanging => 'U',
            BoxKind::Fixed => 'X',
        }
    }
}

/// A six-faced box, possibly holding a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleBox {
    kind: BoxKind,
    faces: Faces,
    opened: bool,
    empty: bool,
    tool: Option<Tool>,
}

impl PuzzleBox {
    /// Creates a box. Fixed boxes never hold a tool, so `tool` is dropped for them.
    pub fn new(kind: BoxKind, faces: Faces, tool: Option<Tool>) -> Self {
        let tool = if kind == BoxKind::Fixed { None } else { tool };
        Self {
            kind,
            faces,
            opened: false,
            empty: tool.is_none(),
            tool,
        }
    }

    /// Creates a regular box.
    pub fn regular(faces: Faces, tool: Option<Tool>) -> Self {
        Self::new(BoxKind::Regular, faces, tool)
    }

    /// Creates an unchanging box.
    pub fn unchanging(faces: Faces, tool: Option<Tool>) -> Self {
        Self::new(BoxKind::Unchanging, faces, tool)
    }

    /// Creates a fixed box.
    pub fn fixed(faces: Faces) -> Self {
        Self::new(BoxKind::Fixed, faces, None)
    }

    /// Returns a fixed box with the same faces. Any held tool is left behind.
    pub fn to_fixed(&self) -> Self {
        Self::fixed(self.faces)
    }

    /// Returns the box kind.
    pub fn kind(&self) -> BoxKind {
        self.kind
    }

    /// Returns the faces.
    pub fn faces(&self) -> &Faces {
        &self.faces
    }

    /// Letter on the top face.
    pub fn top_face(&self) -> Letter {
        self.faces.top()
    }

    /// Whether the box has been opened.
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// Whether the box holds no tool.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Peeks at the held tool without removing it.
    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    /// Whether the player may start a roll on this box.
    pub fn can_roll(&self) -> bool {
        self.kind.can_roll()
    }

    /// Whether a moving chain may pass through this box.
    pub fn allows_domino(&self) -> bool {
        self.kind.allows_domino()
    }

    /// Rolls the box one step. Callers gate eligibility with [`Self::can_roll`].
    pub fn roll(&mut self, direction: Direction) {
        self.faces.roll(direction);
    }

    /// Swaps top and bottom faces. Callers check the kind first.
    pub fn flip(&mut self) {
        self.faces.flip();
    }

    /// Stamps `letter` on the top face; a no-op for unchanging and fixed boxes.
    pub fn restamp(&mut self, letter: Letter) {
        if self.kind.accepts_stamp() {
            self.faces.stamp_top(letter);
        }
    }

    /// Detaches the held tool, marking the box opened and empty.
    ///
    /// Returns `None` and changes nothing if there is no tool.
    #[instrument(skip(self), fields(kind = ?self.kind))]
    pub fn remove_tool(&mut self) -> Option<Tool> {
        let tool = self.tool.take()?;
        self.opened = true;
        self.empty = true;
        debug!(?tool, "Tool removed from box");
        Some(tool)
    }

    /// Opens the box, taking its tool if any. The box is opened and empty afterwards.
    #[instrument(skip(self), fields(kind = ?self.kind))]
    pub fn open(&mut self) -> Option<Tool> {
        let tool = self.remove_tool();
        self.opened = true;
        self.empty = true;
        tool
    }

    /// Marker for the type column of grid listings.
    pub fn kind_marker(&self) -> char {
        self.kind.marker()
    }

    /// `O` once empty, `M` while a tool may still be inside.
    pub fn status_marker(&self) -> char {
        if self.empty { 'O' } else { 'M' }
    }
}
