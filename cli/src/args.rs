//! Command-line options.
//!
//! Maze dimensions come from the flags first, then from `MAZE_ROWS` and
//! `MAZE_COLS` (a `.env` file in the working directory is honoured), then from
//! the built-in defaults.
//!
//! ```text
//! $ mazer --rows 8 --cols 12 --seed 7 --start 0,0 --end 11,7
//! ```

use std::{env, fmt, num::ParseIntError};

use clap::{Parser, ValueEnum};
use log::debug;

use common::{
    constants::{COLS_ENV, DEFAULT_COLS, DEFAULT_ROWS, ROWS_ENV},
    maze::Heuristic,
};

/// Generate a perfect maze and find the shortest way between two of its cells.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Number of rows [default: $MAZE_ROWS or 16]
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Number of columns [default: $MAZE_COLS or 24]
    #[arg(short, long)]
    pub cols: Option<usize>,

    /// Seed for a reproducible maze
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start cell as X,Y [default: top-left corner]
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub start: Option<(isize, isize)>,

    /// End cell as X,Y [default: bottom-right corner]
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub end: Option<(isize, isize)>,

    /// Estimate used to steer the search
    #[arg(value_enum, long, default_value_t = HeuristicArg::Euclidean)]
    pub heuristic: HeuristicArg,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = Format::Ascii)]
    pub format: Format,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    Euclidean,
    Zero,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Euclidean => Heuristic::Euclidean,
            HeuristicArg::Zero => Heuristic::Zero,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Ascii,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    InvalidEnv {
        key: String,
        value: String,
        source: ParseIntError,
    },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidEnv { key, value, .. } => {
                write!(f, "{} must be a whole number, got '{}'", key, value)
            }
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidEnv { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    MissingComma,
    Number(ParseIntError),
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::MissingComma => write!(f, "expected X,Y"),
            PointError::Number(e) => write!(f, "invalid coordinate: {}", e),
        }
    }
}

impl std::error::Error for PointError {}

pub fn parse_point(input: &str) -> Result<(isize, isize), PointError> {
    let (x, y) = input.split_once(',').ok_or(PointError::MissingComma)?;
    let x = x.trim().parse().map_err(PointError::Number)?;
    let y = y.trim().parse().map_err(PointError::Number)?;
    Ok((x, y))
}

/// Parses the process arguments after loading any `.env` file.
pub fn parse() -> Args {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}.", path.display());
    }
    Args::parse()
}

impl Args {
    /// `(nrows, ncols)` after applying flag, environment and default in that order.
    pub fn dimensions(&self) -> Result<(usize, usize), ArgsError> {
        let nrows = resolve(self.rows, ROWS_ENV, DEFAULT_ROWS)?;
        let ncols = resolve(self.cols, COLS_ENV, DEFAULT_COLS)?;
        Ok((nrows, ncols))
    }
}

fn resolve(flag: Option<usize>, key: &str, default: usize) -> Result<usize, ArgsError> {
    if let Some(value) = flag {
        return Ok(value);
    }

    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|source| ArgsError::InvalidEnv {
                key: key.to_string(),
                value: value.clone(),
                source,
            }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_spaces_and_negatives() {
        assert_eq!(parse_point("3,4"), Ok((3, 4)));
        assert_eq!(parse_point(" 3 , -1 "), Ok((3, -1)));
    }

    #[test]
    fn parse_point_rejects_malformed_input() {
        assert_eq!(parse_point("34"), Err(PointError::MissingComma));
        assert!(matches!(parse_point("a,4"), Err(PointError::Number(_))));
        assert!(matches!(parse_point("1,"), Err(PointError::Number(_))));
    }

    #[test]
    fn flags_take_precedence_over_defaults() {
        assert_eq!(resolve(Some(5), "MAZER_TEST_NEVER_SET", 16), Ok(5));
        assert_eq!(resolve(None, "MAZER_TEST_NEVER_SET", 16), Ok(16));
    }

    #[test]
    fn args_parse_every_option() {
        let args = Args::try_parse_from([
            "mazer",
            "-r",
            "4",
            "--cols",
            "6",
            "--seed",
            "11",
            "--start",
            "-1,2",
            "--end",
            "5,3",
            "--heuristic",
            "zero",
            "--format",
            "json",
            "--debug",
        ])
        .expect("arguments should parse");

        assert_eq!(args.dimensions(), Ok((4, 6)));
        assert_eq!(args.seed, Some(11));
        assert_eq!(args.start, Some((-1, 2)));
        assert_eq!(args.end, Some((5, 3)));
        assert_eq!(Heuristic::from(args.heuristic), Heuristic::Zero);
        assert_eq!(args.format, Format::Json);
        assert!(args.debug);
    }

    #[test]
    fn args_reject_bad_points() {
        assert!(Args::try_parse_from(["mazer", "--start", "nowhere"]).is_err());
    }
}
