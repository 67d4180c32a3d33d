//! The 8×8 box grid.

use super::generation;
use super::location::Location;
use super::puzzle_box::PuzzleBox;
use super::snapshot::{CellSnapshot, FaceSnapshot, GridSnapshot};
use super::types::{GRID_SIZE, Letter};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Square grid of boxes. Every cell always holds a box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[PuzzleBox; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Builds a grid by calling `make` once per location, row by row.
    pub fn from_fn(mut make: impl FnMut(Location) -> PuzzleBox) -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| make(Location::from_indices(row, col)))
        });
        Self { cells }
    }

    /// Fills every cell independently using the box probability table.
    #[instrument(skip(rng))]
    pub fn random(rng: &mut impl Rng) -> Self {
        let grid = Self::from_fn(|_| generation::random_box(rng));
        debug!(
            fixed = grid.iter().filter(|(_, b)| !b.can_roll()).count(),
            with_tool = grid.iter().filter(|(_, b)| b.tool().is_some()).count(),
            "Generated random grid"
        );
        grid
    }

    /// Box at `loc`.
    pub fn get(&self, loc: Location) -> &PuzzleBox {
        &self.cells[loc.row()][loc.col()]
    }

    /// Mutable box at `loc`.
    pub fn get_mut(&mut self, loc: Location) -> &mut PuzzleBox {
        &mut self.cells[loc.row()][loc.col()]
    }

    /// Installs `new` at `loc`, returning the box it displaced.
    pub fn replace(&mut self, loc: Location, new: PuzzleBox) -> PuzzleBox {
        std::mem::replace(self.get_mut(loc), new)
    }

    /// Boxes of row `row` in column order.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below [`GRID_SIZE`].
    pub fn row(&self, row: usize) -> &[PuzzleBox; GRID_SIZE] {
        &self.cells[row]
    }

    /// Mutable boxes of row `row`.
    pub fn row_mut(&mut self, row: usize) -> &mut [PuzzleBox; GRID_SIZE] {
        &mut self.cells[row]
    }

    /// Boxes of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Vec<&PuzzleBox> {
        self.cells.iter().map(|row| &row[col]).collect()
    }

    /// Mutable boxes of column `col`, top to bottom.
    pub fn column_mut(&mut self, col: usize) -> Vec<&mut PuzzleBox> {
        self.cells.iter_mut().map(|row| &mut row[col]).collect()
    }

    /// Up to four neighbors in up, down, left, right order.
    pub fn neighbors(&self, loc: Location) -> Vec<Location> {
        use super::types::Direction::{Down, Left, Right, Up};
        [Up, Down, Left, Right]
            .into_iter()
            .filter_map(|dir| loc.step(dir))
            .collect()
    }

    /// Iterates over every location and its box in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &PuzzleBox)> {
        Location::all().map(move |loc| (loc, self.get(loc)))
    }

    /// Number of boxes whose top face shows `letter`.
    #[instrument(skip(self))]
    pub fn count_top_letter(&self, letter: Letter) -> usize {
        self.iter().filter(|(_, b)| b.top_face() == letter).count()
    }

    /// Display view of every cell.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(std::array::from_fn(|row| {
            std::array::from_fn(|col| CellSnapshot::of(&self.cells[row][col]))
        }))
    }

    /// All six faces of the box at `loc`.
    pub fn faces_at(&self, loc: Location) -> FaceSnapshot {
        FaceSnapshot::new(loc, *self.get(loc).faces())
    }
}
