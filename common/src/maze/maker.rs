pub mod algorithms;

use log::debug;
use rand::{
    Rng, SeedableRng,
    prelude::IndexedRandom,
    rngs::StdRng,
};

use algorithms::backtrack::Backtrack;

use super::cell::Coord;
use super::error::Result;
use super::grid::Grid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    Backtrack, // Randomized depth-first search: long winding corridors.
}

/// Carves a perfect maze into a fresh grid using the injected random source.
pub struct MazeMaker<R: Rng> {
    pub grid: Grid,
    pub rng: R,
}

impl<R: Rng> MazeMaker<R> {
    pub fn new(nrows: usize, ncols: usize, rng: R, algorithm: Algorithm) -> Result<Self> {
        let grid = Grid::new(nrows, ncols)?;
        let mut maker = MazeMaker { grid, rng };

        match algorithm {
            Algorithm::Backtrack => maker.backtrack()?,
        }

        Ok(maker)
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    fn pick_cell(&mut self) -> Coord {
        let x = self.rng.random_range(0..self.grid.ncols());
        let y = self.rng.random_range(0..self.grid.nrows());
        Coord::new(x, y)
    }

    fn pick_unvisited_neighbor(&mut self, cell: Coord) -> Option<Coord> {
        let neighbors = self.grid.neighbors_unvisited(cell);
        neighbors.choose(&mut self.rng).copied()
    }

    fn visit_cell(&mut self, cell: Coord) -> Result<()> {
        self.grid.mark_visited(cell)
    }

    fn remove_wall_between(&mut self, from: Coord, to: Coord) -> Result<()> {
        self.grid.remove_wall(from, to)
    }
}

/// Random perfect maze of `nrows` by `ncols` cells, seeded from the thread-local generator.
pub fn generate(nrows: usize, ncols: usize) -> Result<Grid> {
    generate_with_rng(nrows, ncols, &mut rand::rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(nrows: usize, ncols: usize, rng: &mut R) -> Result<Grid> {
    let maker = MazeMaker::new(nrows, ncols, rng, Algorithm::Backtrack)?;
    debug!("Generated {}x{} maze.", nrows, ncols);
    Ok(maker.into_grid())
}

/// Same seed, same maze.
pub fn generate_seeded(nrows: usize, ncols: usize, seed: u64) -> Result<Grid> {
    generate_with_rng(nrows, ncols, &mut StdRng::seed_from_u64(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::error::MazeError;

    #[test]
    fn generate_rejects_zero_rows_or_columns() {
        assert_eq!(
            generate(0, 5),
            Err(MazeError::InvalidDimension { nrows: 0, ncols: 5 })
        );
        assert_eq!(
            generate_seeded(5, 0, 1),
            Err(MazeError::InvalidDimension { nrows: 5, ncols: 0 })
        );
    }

    #[test]
    fn test_backtrack_produces_spanning_trees() {
        for seed in 0..64 {
            let grid = generate_seeded(7, 11, seed).expect("valid dimensions");
            assert!(grid.is_perfect(), "seed {} produced an imperfect maze", seed);
            assert_eq!(grid.open_edges().len(), 7 * 11 - 1);
        }
    }

    #[test]
    fn test_backtrack_visits_every_cell() {
        let grid = generate_seeded(5, 9, 42).expect("valid dimensions");
        assert!(grid.cells().all(|cell| cell.is_visited()));
    }

    #[test]
    fn same_seed_gives_same_maze() {
        let a = generate_seeded(12, 8, 2024).expect("valid dimensions");
        let b = generate_seeded(12, 8, 2024).expect("valid dimensions");
        assert_eq!(a, b);
    }

    #[test]
    fn injected_rng_is_used() {
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);

        let a = generate_with_rng(6, 6, &mut rng_a).expect("valid dimensions");
        let b = generate_with_rng(6, 6, &mut rng_b).expect("valid dimensions");

        assert_eq!(a.open_edges(), b.open_edges());
    }

    #[test]
    fn one_by_one_keeps_all_walls() {
        let grid = generate(1, 1).expect("valid dimensions");
        let cell = grid.cell(Coord::new(0, 0)).expect("only cell");

        assert_eq!(cell.walls().len(), 4);
        assert!(cell.is_visited());
        assert!(grid.open_edges().is_empty());
    }

    #[test]
    fn two_cells_in_a_row_are_joined() {
        let grid = generate(1, 2).expect("valid dimensions");
        assert_eq!(grid.has_wall(Coord::new(0, 0), Coord::new(1, 0)), Ok(false));
    }
}
