use std::cmp::Ordering::{Equal, Greater, Less};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::cell::Coord;
use super::error::{MazeError, Result};

// Variant order is the neighbour order used throughout the grid: north, south, west, east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Step as `(dx, dy)`, with `y` growing downwards.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Compass direction of the single unit step that leads from `from` to `to`.
///
/// Every wall operation resolves adjacency through here, so a zero, diagonal
/// or multi-step delta is rejected in exactly one place.
pub fn direction_between(from: Coord, to: Coord) -> Result<Direction> {
    let step_x = from.x.abs_diff(to.x) == 1;
    let step_y = from.y.abs_diff(to.y) == 1;

    match (from.x.cmp(&to.x), from.y.cmp(&to.y)) {
        (Less, Equal) if step_x => Ok(Direction::Right),
        (Greater, Equal) if step_x => Ok(Direction::Left),
        (Equal, Less) if step_y => Ok(Direction::Down),
        (Equal, Greater) if step_y => Ok(Direction::Up),
        _ => Err(MazeError::NotAdjacent { from, to }),
    }
}
