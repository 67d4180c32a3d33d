//! Oriented faces of a box and the rotations that act on them.

use super::types::{Direction, FACE_COUNT, Letter};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Most faces a single letter may occupy on a freshly made box.
pub const MAX_LETTER_REPEATS: usize = 2;

/// Named face slot. The discriminant is the slot's index in [`Faces`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Face {
    /// Index 0.
    Top = 0,
    /// Index 1.
    Bottom = 1,
    /// Index 2.
    Front = 2,
    /// Index 3.
    Back = 3,
    /// Index 4.
    Left = 4,
    /// Index 5.
    Right = 5,
}

impl Face {
    /// Index of this face in the face array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Faces touched by a roll, as a cycle `[a, b, c, d]` meaning
    /// a takes b's letter, b takes c's, c takes d's and d takes a's.
    fn roll_cycle(direction: Direction) -> [Face; 4] {
        match direction {
            Direction::Right => [Face::Top, Face::Left, Face::Bottom, Face::Right],
            Direction::Left => [Face::Top, Face::Right, Face::Bottom, Face::Left],
            Direction::Up => [Face::Top, Face::Front, Face::Bottom, Face::Back],
            Direction::Down => [Face::Top, Face::Back, Face::Bottom, Face::Front],
        }
    }
}

/// The six letters of a box, indexed by [`Face`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Faces {
    letters: [Letter; FACE_COUNT],
}

impl Faces {
    /// Creates faces from letters in `Top, Bottom, Front, Back, Left, Right` order.
    pub fn new(letters: [Letter; FACE_COUNT]) -> Self {
        Self { letters }
    }

    /// Creates faces showing the same letter everywhere.
    pub fn uniform(letter: Letter) -> Self {
        Self {
            letters: [letter; FACE_COUNT],
        }
    }

    /// Draws six letters, rejecting any draw that would put a letter
    /// on more than [`MAX_LETTER_REPEATS`] faces.
    #[instrument(skip(rng))]
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut letters = [Letter::A; FACE_COUNT];
        let mut counts = [0usize; 8];
        let mut filled = 0;
        while filled < FACE_COUNT {
            let chosen = Letter::random(rng);
            if counts[chosen.index()] < MAX_LETTER_REPEATS {
                counts[chosen.index()] += 1;
                letters[filled] = chosen;
                filled += 1;
            }
        }
        Self { letters }
    }

    /// Letter on the given face.
    pub fn get(&self, face: Face) -> Letter {
        self.letters[face.index()]
    }

    /// Letter on the top face.
    pub fn top(&self) -> Letter {
        self.get(Face::Top)
    }

    /// All six letters in face-index order.
    pub fn letters(&self) -> &[Letter; FACE_COUNT] {
        &self.letters
    }

    /// Returns true if no letter appears on more than [`MAX_LETTER_REPEATS`] faces.
    pub fn respects_repeat_cap(&self) -> bool {
        Letter::ALL.iter().all(|letter| {
            self.letters.iter().filter(|l| *l == letter).count() <= MAX_LETTER_REPEATS
        })
    }

    /// Rotates the faces as if the cube tipped over one step in `direction`.
    pub fn roll(&mut self, direction: Direction) {
        let [a, b, c, d] = Face::roll_cycle(direction);
        let held = self.get(a);
        self.letters[a.index()] = self.get(b);
        self.letters[b.index()] = self.get(c);
        self.letters[c.index()] = self.get(d);
        self.letters[d.index()] = held;
    }

    /// Swaps the top and bottom faces.
    pub fn flip(&mut self) {
        self.letters.swap(Face::Top.index(), Face::Bottom.index());
    }

    /// Overwrites the top face.
    pub fn stamp_top(&mut self, letter: Letter) {
        self.letters[Face::Top.index()] = letter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    fn sample() -> Faces {
        // Top A, Bottom B, Front C, Back D, Left E, Right F
        Faces::new([Letter::A, Letter::B, Letter::C, Letter::D, Letter::E, Letter::F])
    }

    #[test]
    fn test_roll_right_moves_left_to_top() {
        let mut faces = sample();
        faces.roll(Direction::Right);
        assert_eq!(faces.get(Face::Top), Letter::E);
        assert_eq!(faces.get(Face::Left), Letter::B);
        assert_eq!(faces.get(Face::Bottom), Letter::F);
        assert_eq!(faces.get(Face::Right), Letter::A);
        assert_eq!(faces.get(Face::Front), Letter::C);
        assert_eq!(faces.get(Face::Back), Letter::D);
    }

    #[test]
    fn test_roll_left_moves_right_to_top() {
        let mut faces = sample();
        faces.roll(Direction::Left);
        assert_eq!(faces.get(Face::Top), Letter::F);
        assert_eq!(faces.get(Face::Right), Letter::B);
        assert_eq!(faces.get(Face::Bottom), Letter::E);
        assert_eq!(faces.get(Face::Left), Letter::A);
    }

    #[test]
    fn test_roll_up_moves_front_to_top() {
        let mut faces = sample();
        faces.roll(Direction::Up);
        assert_eq!(faces.get(Face::Top), Letter::C);
        assert_eq!(faces.get(Face::Front), Letter::B);
        assert_eq!(faces.get(Face::Bottom), Letter::D);
        assert_eq!(faces.get(Face::Back), Letter::A);
        assert_eq!(faces.get(Face::Left), Letter::E);
        assert_eq!(faces.get(Face::Right), Letter::F);
    }

    #[test]
    fn test_roll_down_moves_back_to_top() {
        let mut faces = sample();
        faces.roll(Direction::Down);
        assert_eq!(faces.get(Face::Top), Letter::D);
        assert_eq!(faces.get(Face::Back), Letter::B);
        assert_eq!(faces.get(Face::Bottom), Letter::C);
        assert_eq!(faces.get(Face::Front), Letter::A);
    }

    #[test]
    fn test_four_rolls_return_to_start() {
        for dir in Direction::iter() {
            let mut faces = sample();
            for _ in 0..4 {
                faces.roll(dir);
            }
            assert_eq!(faces, sample(), "four rolls {dir} should close the cycle");
        }
    }

    #[test]
    fn test_opposite_rolls_cancel() {
        for dir in Direction::iter() {
            let mut faces = sample();
            faces.roll(dir);
            faces.roll(dir.opposite());
            assert_eq!(faces, sample());
        }
    }

    #[test]
    fn test_double_flip_is_identity() {
        let mut faces = sample();
        faces.flip();
        assert_eq!(faces.top(), Letter::B);
        assert_eq!(faces.get(Face::Bottom), Letter::A);
        faces.flip();
        assert_eq!(faces, sample());
    }

    #[test]
    fn test_random_faces_respect_cap() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert!(Faces::random(&mut rng).respects_repeat_cap());
        }
    }

    #[test]
    fn test_uniform_faces_break_cap() {
        assert!(!Faces::uniform(Letter::C).respects_repeat_cap());
    }
}
