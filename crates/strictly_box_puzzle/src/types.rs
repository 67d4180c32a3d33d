//! Core domain symbols for the box puzzle.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the square grid.
pub const GRID_SIZE: usize = 8;

/// Number of turns in one session.
pub const TURN_COUNT: u8 = 5;

/// Number of faces on a box.
pub const FACE_COUNT: usize = 6;

/// A letter printed on a box face.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Letter {
    /// Letter A.
    A,
    /// Letter B.
    B,
    /// Letter C.
    C,
    /// Letter D.
    D,
    /// Letter E.
    E,
    /// Letter F.
    F,
    /// Letter G.
    G,
    /// Letter H.
    H,
}

impl Letter {
    /// All 8 letters in order.
    pub const ALL: [Letter; 8] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::H,
    ];

    /// Draws a letter uniformly at random.
    #[instrument(skip(rng))]
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Converts a 0-based index (0 = A) to a letter.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the 0-based index of this letter.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Direction in which a box rolls.
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
pub enum Direction {
    /// Towards row 1.
    #[display("up")]
    Up,
    /// Towards row 8.
    #[display("down")]
    Down,
    /// Towards column 1.
    #[display("left")]
    Left,
    /// Towards column 8.
    #[display("right")]
    Right,
}

impl Direction {
    /// Row and column step for one move in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Returns the direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_letter_index_roundtrip() {
        for letter in Letter::iter() {
            assert_eq!(Letter::from_index(letter.index()), Some(letter));
        }
        assert_eq!(Letter::from_index(8), None);
    }

    #[test]
    fn test_random_letter_covers_all() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 8];
        for _ in 0..500 {
            seen[Letter::random(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for dir in Direction::iter() {
            let (r1, c1) = dir.delta();
            let (r2, c2) = dir.opposite().delta();
            assert_eq!((r1 + r2, c1 + c2), (0, 0));
        }
    }
}
