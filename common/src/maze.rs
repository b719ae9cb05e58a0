//! Perfect rectangular mazes and shortest paths through them.
//!
//! A [`Grid`] starts fully walled. [`generate`] carves it into a spanning tree
//! with a randomized depth-first backtracker, and [`solve`] runs a best-first
//! search over the open passages. Neither touches rendering or input.

pub mod cell;
pub mod direction;
pub mod error;
pub mod grid;
pub mod maker;
pub mod solver;

pub use cell::{Cell, Coord, WallSegment};
pub use direction::{Direction, direction_between};
pub use error::{MazeError, Result};
pub use grid::Grid;
pub use maker::{Algorithm, MazeMaker, generate, generate_seeded, generate_with_rng};
pub use solver::{Heuristic, Path, solve, solve_with};
