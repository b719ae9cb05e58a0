use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use serde::Serialize;

use super::cell::Coord;
use super::error::{MazeError, Result};
use super::grid::Grid;

/// Estimate of the remaining cost added to a cell's distance when ordering the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// Straight-line distance to the goal. Admissible on a unit-step grid.
    #[default]
    Euclidean,
    /// Plain Dijkstra.
    Zero,
}

impl Heuristic {
    pub fn estimate(self, from: Coord, to: Coord) -> f64 {
        match self {
            Heuristic::Euclidean => {
                let dx = from.x as f64 - to.x as f64;
                let dy = from.y as f64 - to.y as f64;
                (dx * dx + dy * dy).sqrt()
            }
            Heuristic::Zero => 0.0,
        }
    }
}

/// Cells from start to end, each step crossing an open passage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Path(Vec<Coord>);

impl Path {
    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves, one less than the number of cells.
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Coord> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<Coord> {
        self.0.last().copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }
}

// Heap entry. Lower key first, then earlier insertion first.
#[derive(Debug)]
struct Frontier {
    key: f64,
    seq: u64,
    coord: Coord,
    distance: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Per-solve scratch, indexed like the grid's cells. The grid itself is never written.
struct SearchState {
    reached: Vec<bool>,
    predecessor: Vec<Option<Coord>>,
}

impl SearchState {
    fn new(len: usize) -> Self {
        SearchState {
            reached: vec![false; len],
            predecessor: vec![None; len],
        }
    }

    fn reach(&mut self, index: usize, predecessor: Option<Coord>) {
        self.reached[index] = true;
        self.predecessor[index] = predecessor;
    }

    fn path_to(&self, grid: &Grid, end: Coord) -> Path {
        let mut cells = vec![end];
        let mut curr = end;

        while let Some(prev) = self.predecessor[grid.index(curr)] {
            cells.push(prev);
            curr = prev;
        }

        cells.reverse();
        Path(cells)
    }
}

fn checked_coord(grid: &Grid, (x, y): (isize, isize)) -> Result<Coord> {
    grid.coord(x, y).ok_or(MazeError::OutOfBounds { x, y })
}

/// Shortest path between two cells using the Euclidean heuristic.
///
/// `Ok(None)` means the cells are not connected, which cannot happen in a
/// maze produced by the generator.
pub fn solve(grid: &Grid, start: (isize, isize), end: (isize, isize)) -> Result<Option<Path>> {
    solve_with(grid, start, end, Heuristic::default())
}

pub fn solve_with(
    grid: &Grid,
    start: (isize, isize),
    end: (isize, isize),
    heuristic: Heuristic,
) -> Result<Option<Path>> {
    let start = checked_coord(grid, start)?;
    let end = checked_coord(grid, end)?;
    debug!("Solving from {} to {} with {:?} heuristic.", start, end, heuristic);

    if start == end {
        return Ok(Some(Path(vec![start])));
    }

    let mut state = SearchState::new(grid.cell_count());
    let mut frontier = BinaryHeap::new();
    let mut seq = 0;
    let mut settled = 0;

    state.reach(grid.index(start), None);
    frontier.push(Frontier {
        key: heuristic.estimate(start, end),
        seq,
        coord: start,
        distance: 0,
    });

    while let Some(Frontier { coord, distance, .. }) = frontier.pop() {
        settled += 1;

        if coord == end {
            trace!("Settled {} cells before reaching {}.", settled, end);
            return Ok(Some(state.path_to(grid, end)));
        }

        // Cells are claimed when first discovered and never relaxed again.
        for next in grid.neighbors_open(coord)? {
            let index = grid.index(next);
            if state.reached[index] {
                continue;
            }

            state.reach(index, Some(coord));
            seq += 1;
            frontier.push(Frontier {
                key: (distance + 1) as f64 + heuristic.estimate(next, end),
                seq,
                coord: next,
                distance: distance + 1,
            });
        }
    }

    trace!("Frontier exhausted after {} cells.", settled);
    Ok(None)
}
