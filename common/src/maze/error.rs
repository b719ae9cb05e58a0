use std::fmt;

use super::cell::Coord;

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// A grid needs at least one row and one column.
    InvalidDimension { nrows: usize, ncols: usize },
    /// Wall and direction operations only make sense for cells one step apart.
    NotAdjacent { from: Coord, to: Coord },
    /// Caller-supplied coordinates that fall outside the grid.
    OutOfBounds { x: isize, y: isize },
    /// Two neighbours disagree about the wall they share.
    InconsistentWall { from: Coord, to: Coord },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { nrows, ncols } => {
                write!(f, "invalid maze dimensions {}x{}", nrows, ncols)
            }
            MazeError::NotAdjacent { from, to } => {
                write!(f, "cells {} and {} are not neighbors", from, to)
            }
            MazeError::OutOfBounds { x, y } => {
                write!(f, "coordinates ({}, {}) are outside the maze", x, y)
            }
            MazeError::InconsistentWall { from, to } => {
                write!(f, "cells {} and {} disagree about their shared wall", from, to)
            }
        }
    }
}

impl std::error::Error for MazeError {}
