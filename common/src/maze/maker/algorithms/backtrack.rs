use log::debug;
use rand::Rng;

use super::super::MazeMaker;
use crate::maze::error::Result;

pub trait Backtrack {
    fn backtrack(&mut self) -> Result<()>;
}

impl<R: Rng> Backtrack for MazeMaker<R> {
    fn backtrack(&mut self) -> Result<()> {
        let mut stack = Vec::new();

        let initial_cell = self.pick_cell();
        debug!("Backtrack starting from {}.", initial_cell);
        self.visit_cell(initial_cell)?;
        stack.push(initial_cell);

        // A cell with no unvisited neighbour is simply not pushed back, which is the backtrack.
        while let Some(curr) = stack.pop() {
            if let Some(next) = self.pick_unvisited_neighbor(curr) {
                stack.push(curr);
                self.remove_wall_between(curr, next)?;
                self.visit_cell(next)?;
                stack.push(next);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::maze::grid::Grid;

    #[test]
    fn backtrack_on_a_single_row_opens_every_inner_wall() {
        let mut maker = MazeMaker {
            grid: Grid::new(1, 6).expect("valid dimensions"),
            rng: StdRng::seed_from_u64(3),
        };

        maker.backtrack().expect("backtrack should not fail on a fresh grid");

        assert_eq!(maker.grid.open_edges().len(), 5);
        assert!(maker.grid.is_perfect());
    }
}
