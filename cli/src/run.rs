use std::{fmt, io::{self, Write}};

use log::{info, warn};
use serde::Serialize;

use common::maze::{Grid, MazeError, Path, generate, generate_seeded, solve_with};

use crate::{
    args::{Args, ArgsError, Format},
    render,
};

#[derive(Debug)]
pub enum RunError {
    Args(ArgsError),
    Maze(MazeError),
    InvalidCell { label: &'static str, x: isize, y: isize },
    Json(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Args(e) => write!(f, "{}", e),
            RunError::Maze(e) => write!(f, "{}", e),
            RunError::InvalidCell { label, x, y } => {
                write!(f, "{} cell ({}, {}) is not inside the maze", label, x, y)
            }
            RunError::Json(e) => write!(f, "failed to encode JSON: {}", e),
            RunError::Io(e) => write!(f, "failed to write output: {}", e),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Args(e) => Some(e),
            RunError::Maze(e) => Some(e),
            RunError::InvalidCell { .. } => None,
            RunError::Json(e) => Some(e),
            RunError::Io(e) => Some(e),
        }
    }
}

impl From<ArgsError> for RunError {
    fn from(e: ArgsError) -> Self {
        RunError::Args(e)
    }
}

impl From<MazeError> for RunError {
    fn from(e: MazeError) -> Self {
        RunError::Maze(e)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(e: serde_json::Error) -> Self {
        RunError::Json(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        RunError::Io(e)
    }
}

#[derive(Serialize)]
struct Output<'a> {
    grid: &'a Grid,
    path: Option<&'a Path>,
}

fn validate_cell(grid: &Grid, label: &'static str, (x, y): (isize, isize)) -> Result<(), RunError> {
    if grid.in_bounds(x, y) {
        Ok(())
    } else {
        Err(RunError::InvalidCell { label, x, y })
    }
}

/// Generates a maze, solves it between the requested cells and writes the result to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W, colored: bool) -> Result<Option<Path>, RunError> {
    let (nrows, ncols) = args.dimensions()?;

    let grid = match args.seed {
        Some(seed) => generate_seeded(nrows, ncols, seed)?,
        None => generate(nrows, ncols)?,
    };
    info!("Generated a {}x{} maze.", nrows, ncols);

    let start = args.start.unwrap_or((0, 0));
    let end = args
        .end
        .unwrap_or((ncols as isize - 1, nrows as isize - 1));
    validate_cell(&grid, "start", start)?;
    validate_cell(&grid, "end", end)?;

    let path = solve_with(&grid, start, end, args.heuristic.into())?;
    match &path {
        Some(path) => info!("Found path of {} steps.", path.hops()),
        None => warn!("Path not found."),
    }

    match args.format {
        Format::Ascii => writeln!(out, "{}", render::ascii(&grid, path.as_ref(), colored))?,
        Format::Json => {
            let output = Output {
                grid: &grid,
                path: path.as_ref(),
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(path)
}
