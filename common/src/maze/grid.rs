use std::collections::BTreeSet;

use disjoint::DisjointSet;
use serde::Serialize;
use strum::IntoEnumIterator;

use super::cell::{Cell, Coord, WallSegment};
use super::direction::{Direction, direction_between};
use super::error::{MazeError, Result};

/// Rectangular table of cells, stored row by row.
///
/// A wall between two neighbours is recorded on both of them. All mutation
/// goes through [`Grid::remove_wall`], which flips both flags together, so the
/// two views of a shared wall never disagree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    nrows: usize,
    ncols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Fully walled, unvisited grid of `nrows` by `ncols` cells.
    pub fn new(nrows: usize, ncols: usize) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(MazeError::InvalidDimension { nrows, ncols });
        }

        let cells = (0..nrows)
            .flat_map(|y| (0..ncols).map(move |x| Cell::new(x, y)))
            .collect();

        Ok(Grid {
            nrows,
            ncols,
            cells,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.ncols && (y as usize) < self.nrows
    }

    /// Converts raw signed coordinates into a cell identity, if they land inside the grid.
    pub fn coord(&self, x: isize, y: isize) -> Option<Coord> {
        if self.in_bounds(x, y) {
            Some(Coord::new(x as usize, y as usize))
        } else {
            None
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.ncols && coord.y < self.nrows
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if self.contains(coord) {
            Some(&self.cells[self.index(coord)])
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn index(&self, coord: Coord) -> usize {
        coord.y * self.ncols + coord.x
    }

    fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell> {
        let index = self.checked_index(coord)?;
        Ok(&mut self.cells[index])
    }

    fn checked_index(&self, coord: Coord) -> Result<usize> {
        if self.contains(coord) {
            Ok(self.index(coord))
        } else {
            Err(MazeError::OutOfBounds {
                x: isize::try_from(coord.x).unwrap_or(isize::MAX),
                y: isize::try_from(coord.y).unwrap_or(isize::MAX),
            })
        }
    }

    fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        coord.step(direction).filter(|&next| self.contains(next))
    }

    fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::iter().filter_map(move |direction| self.neighbor(coord, direction))
    }

    /// In-grid neighbours the generator has not reached yet, in north, south, west, east order.
    pub fn neighbors_unvisited(&self, coord: Coord) -> Vec<Coord> {
        self.neighbors(coord)
            .filter(|&next| !self.cells[self.index(next)].is_visited())
            .collect()
    }

    /// Neighbours reachable through an open passage, in north, south, west, east order.
    ///
    /// Fails with `InconsistentWall` if a shared wall's two flags disagree.
    pub fn neighbors_open(&self, coord: Coord) -> Result<Vec<Coord>> {
        let mut open = Vec::new();
        for next in self.neighbors(coord) {
            if !self.has_wall(coord, next)? {
                open.push(next);
            }
        }
        Ok(open)
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(Cell::is_visited)
    }

    pub(crate) fn mark_visited(&mut self, coord: Coord) -> Result<()> {
        self.cell_mut(coord)?.mark_visited();
        Ok(())
    }

    /// Opens the passage between two adjacent cells. Removing an open wall again is a no-op.
    pub fn remove_wall(&mut self, from: Coord, to: Coord) -> Result<()> {
        let direction = direction_between(from, to)?;
        self.checked_index(from)?;
        self.checked_index(to)?;

        self.cell_mut(from)?.set_wall(direction, false);
        self.cell_mut(to)?.set_wall(direction.opposite(), false);
        Ok(())
    }

    /// Whether a wall separates two adjacent cells.
    ///
    /// Both cells' flags are consulted; if they disagree the grid is corrupt and
    /// `InconsistentWall` is returned rather than guessing.
    pub fn has_wall(&self, from: Coord, to: Coord) -> Result<bool> {
        let direction = direction_between(from, to)?;
        let from_side = self.cells[self.checked_index(from)?].has_wall_on(direction);
        let to_side = self.cells[self.checked_index(to)?].has_wall_on(direction.opposite());

        if from_side != to_side {
            return Err(MazeError::InconsistentWall { from, to });
        }

        Ok(from_side)
    }

    #[cfg(test)]
    pub(crate) fn set_wall_flag(&mut self, coord: Coord, direction: Direction, present: bool) {
        let index = self.index(coord);
        self.cells[index].set_wall(direction, present);
    }

    /// Every open passage once, as `(lower, higher)` coordinate pairs.
    pub fn open_edges(&self) -> Vec<(Coord, Coord)> {
        let mut edges = Vec::new();

        for cell in &self.cells {
            let coord = cell.coord();
            for direction in [Direction::Right, Direction::Down] {
                if let Some(next) = self.neighbor(coord, direction) {
                    if !cell.has_wall_on(direction) {
                        edges.push((coord, next));
                    }
                }
            }
        }

        edges
    }

    /// First pair of neighbours whose shared wall flags disagree, as an error.
    pub fn check_consistency(&self) -> Result<()> {
        for cell in &self.cells {
            let coord = cell.coord();
            for direction in [Direction::Right, Direction::Down] {
                if let Some(next) = self.neighbor(coord, direction) {
                    self.has_wall(coord, next)?;
                }
            }
        }
        Ok(())
    }

    /// True when the open passages form a spanning tree: `n - 1` edges and no cycle.
    pub fn is_perfect(&self) -> bool {
        if self.check_consistency().is_err() {
            return false;
        }

        let edges = self.open_edges();
        if edges.len() != self.cells.len() - 1 {
            return false;
        }

        let mut components = DisjointSet::with_len(self.cells.len());
        for (a, b) in edges {
            let (a, b) = (self.index(a), self.index(b));
            if components.is_joined(a, b) {
                return false;
            }
            components.join(a, b);
        }

        true
    }

    /// All standing walls as unit segments, each shared wall listed once.
    pub fn wall_segments(&self) -> Vec<WallSegment> {
        self.cells
            .iter()
            .flat_map(Cell::wall_segments)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
