//! Which way an edge box may roll.

use super::super::location::Location;
use super::super::types::{Direction, GRID_SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The two inward directions offered at a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CornerChoices {
    horizontal: Direction,
    vertical: Direction,
}

impl CornerChoices {
    /// Choices for a corner location.
    fn for_corner(loc: Location) -> Self {
        let horizontal = if loc.col() == 0 { Direction::Right } else { Direction::Left };
        let vertical = if loc.row() == 0 { Direction::Down } else { Direction::Up };
        Self { horizontal, vertical }
    }

    /// First option: along the row.
    pub fn horizontal(&self) -> Direction {
        self.horizontal
    }

    /// Second option: along the column.
    pub fn vertical(&self) -> Direction {
        self.vertical
    }

    /// Whether `direction` is one of the two options.
    pub fn contains(&self, direction: Direction) -> bool {
        direction == self.horizontal || direction == self.vertical
    }
}

/// How the roll direction of an edge box is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeDirection {
    /// Non-corner edge: one inward direction, applied automatically.
    Forced(Direction),
    /// Corner: the player picks one of two.
    Corner(CornerChoices),
}

impl EdgeDirection {
    /// Whether `direction` is a legal roll for this edge box.
    pub fn permits(&self, direction: Direction) -> bool {
        match self {
            EdgeDirection::Forced(forced) => *forced == direction,
            EdgeDirection::Corner(choices) => choices.contains(direction),
        }
    }
}

/// Resolves the inward direction(s) for `loc`, or `None` if it is not on the edge.
#[instrument]
pub fn resolve_edge_direction(loc: Location) -> Option<EdgeDirection> {
    if !loc.is_edge() {
        return None;
    }
    if loc.is_corner() {
        return Some(EdgeDirection::Corner(CornerChoices::for_corner(loc)));
    }
    let last = GRID_SIZE - 1;
    let forced = if loc.row() == 0 {
        Direction::Down
    } else if loc.row() == last {
        Direction::Up
    } else if loc.col() == 0 {
        Direction::Right
    } else {
        Direction::Left
    };
    Some(EdgeDirection::Forced(forced))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::new(row, col).unwrap()
    }

    #[test]
    fn test_interior_has_no_direction() {
        assert_eq!(resolve_edge_direction(loc(3, 4)), None);
    }

    #[test]
    fn test_sides_are_forced_inward() {
        let cases = [
            (loc(0, 3), Direction::Down),
            (loc(7, 3), Direction::Up),
            (loc(4, 0), Direction::Right),
            (loc(4, 7), Direction::Left),
        ];
        for (side, inward) in cases {
            assert_eq!(resolve_edge_direction(side), Some(EdgeDirection::Forced(inward)), "{side}");
        }
    }

    #[test]
    fn test_corner_choices() {
        let cases = [
            (loc(0, 0), Direction::Right, Direction::Down),
            (loc(0, 7), Direction::Left, Direction::Down),
            (loc(7, 0), Direction::Right, Direction::Up),
            (loc(7, 7), Direction::Left, Direction::Up),
        ];
        for (corner, horizontal, vertical) in cases {
            match resolve_edge_direction(corner) {
                Some(EdgeDirection::Corner(choices)) => {
                    assert_eq!(choices.horizontal(), horizontal, "{corner}");
                    assert_eq!(choices.vertical(), vertical, "{corner}");
                }
                other => panic!("{corner} should offer a choice, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_permits_rejects_outward() {
        let corner = resolve_edge_direction(loc(0, 0)).unwrap();
        assert!(corner.permits(Direction::Right));
        assert!(corner.permits(Direction::Down));
        assert!(!corner.permits(Direction::Up));
        assert!(!corner.permits(Direction::Left));

        let side = resolve_edge_direction(loc(0, 4)).unwrap();
        assert!(side.permits(Direction::Down));
        assert!(!side.permits(Direction::Right));
    }
}
