//! Kani arbitrary implementations for puzzle types.
//!
//! These implementations allow Kani to explore all possible values of our types
//! during model checking.

#[cfg(kani)]
use super::{Direction, FACE_COUNT, Faces, GRID_SIZE, Letter, Location};

#[cfg(kani)]
impl kani::Arbitrary for Letter {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < Letter::ALL.len());
        Letter::ALL[index]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Direction {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 4);
        match index {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::Right,
            _ => unreachable!(),
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Faces {
    fn any() -> Self {
        // Cap not assumed: rolling must be a permutation for any letters.
        let letters: [Letter; FACE_COUNT] = kani::any();
        Faces::new(letters)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Location {
    fn any() -> Self {
        let row: usize = kani::any();
        let col: usize = kani::any();
        kani::assume(row < GRID_SIZE && col < GRID_SIZE);
        Location::from_indices(row, col)
    }
}
