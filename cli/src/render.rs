use crossterm::style::Stylize;

use common::maze::{Coord, Grid, Path};

pub const WALL: &str = "██";
pub const SPACE: &str = "  ";
pub const TRAIL: &str = "▒▒";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Space,
    Trail,
}

// Cell (x, y) sits at block (2y + 1, 2x + 1); the blocks between cells are the walls.
fn block(coord: Coord) -> (usize, usize) {
    (2 * coord.y + 1, 2 * coord.x + 1)
}

/// Block map of the maze, `2 * nrows + 1` rows by `2 * ncols + 1` columns.
pub fn tiles(grid: &Grid, path: Option<&Path>) -> Vec<Vec<Tile>> {
    let height = 2 * grid.nrows() + 1;
    let width = 2 * grid.ncols() + 1;
    let mut tiles = vec![vec![Tile::Wall; width]; height];

    for cell in grid.cells() {
        let (row, col) = block(cell.coord());
        tiles[row][col] = Tile::Space;

        for side in cell.open_sides() {
            let (dx, dy) = side.delta();
            let wall_row = row.saturating_add_signed(dy);
            let wall_col = col.saturating_add_signed(dx);
            tiles[wall_row][wall_col] = Tile::Space;
        }
    }

    if let Some(path) = path {
        for &coord in path.cells() {
            let (row, col) = block(coord);
            tiles[row][col] = Tile::Trail;
        }

        for pair in path.cells().windows(2) {
            let row = pair[0].y + pair[1].y + 1;
            let col = pair[0].x + pair[1].x + 1;
            tiles[row][col] = Tile::Trail;
        }
    }

    tiles
}

pub fn ascii(grid: &Grid, path: Option<&Path>, colored: bool) -> String {
    tiles(grid, path)
        .iter()
        .map(|row| {
            row.iter()
                .map(|tile| match tile {
                    Tile::Wall => WALL.to_string(),
                    Tile::Space => SPACE.to_string(),
                    Tile::Trail if colored => TRAIL.red().to_string(),
                    Tile::Trail => TRAIL.to_string(),
                })
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join("\n")
}
