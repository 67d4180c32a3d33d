//! Grid coordinates and the location text grammar.
//!
//! A [`Location`] is always inside the grid; constructing one is the
//! bounds check. Text input is accepted as `R<row>-C<col>` or
//! `<row>-<col>` (1-based, any case, surrounding whitespace ignored) and
//! always displays as the canonical `R<row>-C<col>`.

use super::types::{Direction, GRID_SIZE};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{instrument, warn};

static PREFIXED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[Rr]([0-9]+)-[Cc]([0-9]+)\s*$").expect("static location pattern")
});

static BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]+)-([0-9]+)\s*$").expect("static location pattern"));

/// Why a location could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum LocationError {
    /// Text does not match either accepted form.
    #[display("Invalid location format: {:?} (expected R1-C1 or 1-1)", _0)]
    InvalidLocation(String),

    /// Coordinates parse but fall outside the grid (1-based for display).
    #[display("Out of bounds: R{row}-C{col}")]
    OutOfBounds {
        /// 1-based row as given.
        row: u64,
        /// 1-based column as given.
        col: u64,
    },
}

impl std::error::Error for LocationError {}

/// A cell on the grid, stored 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    row: usize,
    col: usize,
}

impl Location {
    /// Creates a location from 0-based indices.
    pub fn new(row: usize, col: usize) -> Result<Self, LocationError> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Ok(Self { row, col })
        } else {
            Err(LocationError::OutOfBounds {
                row: row as u64 + 1,
                col: col as u64 + 1,
            })
        }
    }

    /// Location for indices already known to be inside the grid.
    pub(crate) fn from_indices(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row, col }
    }

    /// Creates a location from 1-based indices, as players type them.
    pub fn from_one_based(row: u64, col: u64) -> Result<Self, LocationError> {
        let in_range = |v: u64| (1..=GRID_SIZE as u64).contains(&v);
        if in_range(row) && in_range(col) {
            Ok(Self {
                row: (row - 1) as usize,
                col: (col - 1) as usize,
            })
        } else {
            Err(LocationError::OutOfBounds { row, col })
        }
    }

    /// Parses location text in either accepted form.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        let caps = PREFIXED
            .captures(input)
            .or_else(|| BARE.captures(input))
            .ok_or_else(|| {
                warn!(input, "Unrecognized location text");
                LocationError::InvalidLocation(input.to_string())
            })?;

        // The grammar guarantees digits; only overflow can fail, and an
        // overflowing number is certainly outside the grid.
        let number = |i: usize| caps[i].parse::<u64>().unwrap_or(u64::MAX);
        Self::from_one_based(number(1), number(2))
    }

    /// All 64 locations in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Location { row, col }))
    }

    /// 0-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// 0-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Whether the location lies on the outer border.
    pub fn is_edge(self) -> bool {
        self.row == 0 || self.row == GRID_SIZE - 1 || self.col == 0 || self.col == GRID_SIZE - 1
    }

    /// Whether the location is one of the four corners.
    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == GRID_SIZE - 1) && (self.col == 0 || self.col == GRID_SIZE - 1)
    }

    /// The neighboring location one step in `direction`, or `None` past the border.
    pub fn step(self, direction: Direction) -> Option<Location> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Location::new(row, col).ok()
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{}-C{}", self.row + 1, self.col + 1)
    }
}
