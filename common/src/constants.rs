// Used when neither a flag nor the environment says otherwise.
pub const DEFAULT_ROWS: usize = 16;
pub const DEFAULT_COLS: usize = 24;

pub const ROWS_ENV: &str = "MAZE_ROWS";
pub const COLS_ENV: &str = "MAZE_COLS";
