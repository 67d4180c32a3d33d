//! Random box creation.
//!
//! Kind roll out of 100: below 85 regular, below 95 unchanging, else fixed.
//! Regular boxes get each tool with 15% and nothing with 25%; unchanging
//! boxes always get a tool, 20% each; fixed boxes never get one.

use super::faces::Faces;
use super::puzzle_box::{BoxKind, PuzzleBox};
use super::tools::Tool;
use rand::Rng;
use tracing::instrument;

const REGULAR_CUTOFF: u32 = 85;
const UNCHANGING_CUTOFF: u32 = 95;
const REGULAR_TOOL_BAND: u32 = 15;
const UNCHANGING_TOOL_BAND: u32 = 20;

/// Tools in the order their probability bands are laid out.
const TOOL_BANDS: [Tool; 5] = [
    Tool::PlusShapeStamp,
    Tool::MassRowStamp,
    Tool::MassColumnStamp,
    Tool::BoxFlipper,
    Tool::BoxFixer,
];

/// Picks a box kind from a roll in `0..100`.
pub fn kind_for_roll(roll: u32) -> BoxKind {
    if roll < REGULAR_CUTOFF {
        BoxKind::Regular
    } else if roll < UNCHANGING_CUTOFF {
        BoxKind::Unchanging
    } else {
        BoxKind::Fixed
    }
}

/// Picks a tool for a box of `kind` from a roll in `0..100`.
pub fn tool_for_roll(kind: BoxKind, roll: u32) -> Option<Tool> {
    match kind {
        BoxKind::Regular => TOOL_BANDS.get((roll / REGULAR_TOOL_BAND) as usize).copied(),
        BoxKind::Unchanging => {
            let band = ((roll / UNCHANGING_TOOL_BAND) as usize).min(TOOL_BANDS.len() - 1);
            Some(TOOL_BANDS[band])
        }
        BoxKind::Fixed => None,
    }
}

/// Creates one box with random faces, kind and tool.
#[instrument(skip(rng))]
pub fn random_box(rng: &mut impl Rng) -> PuzzleBox {
    let faces = Faces::random(rng);
    let kind = kind_for_roll(rng.random_range(0..100));
    let tool = tool_for_roll(kind, rng.random_range(0..100));
    PuzzleBox::new(kind, faces, tool)
}
