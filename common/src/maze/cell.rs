use std::fmt;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::direction::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }

    /// The coordinate one step away, or `None` when it would be negative.
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Coord { x, y })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord { x, y }
    }
}

/// A unit line between two grid corners, `(x1, y1)` to `(x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WallSegment {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    coord: Coord,
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
    #[serde(skip)]
    visited: bool,
}

impl Cell {
    pub(crate) fn new(x: usize, y: usize) -> Cell {
        Cell {
            coord: Coord { x, y },
            top: true,
            bottom: true,
            left: true,
            right: true,
            visited: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn x(&self) -> usize {
        self.coord.x
    }

    pub fn y(&self) -> usize {
        self.coord.y
    }

    /// Whether this cell has been absorbed into the maze by the generator.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub fn has_wall_on(&self, side: Direction) -> bool {
        match side {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    // Only `Grid` may touch a single side; it keeps the neighbour in step.
    pub(crate) fn set_wall(&mut self, side: Direction, present: bool) {
        match side {
            Direction::Up => self.top = present,
            Direction::Down => self.bottom = present,
            Direction::Left => self.left = present,
            Direction::Right => self.right = present,
        }
    }

    pub fn open_sides(&self) -> Vec<Direction> {
        Direction::iter()
            .filter(|&side| !self.has_wall_on(side))
            .collect()
    }

    pub fn walls(&self) -> Vec<Direction> {
        Direction::iter()
            .filter(|&side| self.has_wall_on(side))
            .collect()
    }

    /// Line segments, in corner coordinates, for each wall still standing.
    pub fn wall_segments(&self) -> Vec<WallSegment> {
        let Coord { x, y } = self.coord;

        self.walls()
            .into_iter()
            .map(|side| match side {
                Direction::Up => WallSegment { x1: x, y1: y, x2: x + 1, y2: y },
                Direction::Down => WallSegment { x1: x, y1: y + 1, x2: x + 1, y2: y + 1 },
                Direction::Left => WallSegment { x1: x, y1: y, x2: x, y2: y + 1 },
                Direction::Right => WallSegment { x1: x + 1, y1: y, x2: x + 1, y2: y + 1 },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_fully_walled_and_unvisited() {
        let cell = Cell::new(2, 5);

        assert_eq!(cell.coord(), Coord::new(2, 5));
        assert!(!cell.is_visited());
        assert!(cell.open_sides().is_empty());
        assert_eq!(
            cell.walls(),
            vec![Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn wall_segments_follow_cell_corners() {
        let mut cell = Cell::new(1, 2);
        cell.set_wall(Direction::Up, false);
        cell.set_wall(Direction::Left, false);

        assert_eq!(
            cell.wall_segments(),
            vec![
                WallSegment { x1: 1, y1: 3, x2: 2, y2: 3 },
                WallSegment { x1: 2, y1: 2, x2: 2, y2: 3 },
            ]
        );
        assert_eq!(cell.open_sides(), vec![Direction::Up, Direction::Left]);
    }

    #[test]
    fn step_refuses_to_leave_the_first_quadrant() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Right), Some(Coord::new(1, 0)));
        assert_eq!(origin.step(Direction::Down), Some(Coord::new(0, 1)));
    }
}
