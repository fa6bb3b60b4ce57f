use super::grid::{Cell, Grid};
use super::state::Snake;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Rejected random draws before falling back to scanning for free cells
const MAX_RANDOM_DRAWS: usize = 64;

/// Places food on a random cell the snake does not occupy
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Pick a uniformly random free cell, or `None` if the snake fills the grid
    pub fn respawn(&mut self, snake: &Snake, grid: &Grid) -> Option<Cell> {
        let side = grid.axis_cells();
        if side <= 0 {
            return None;
        }

        for _ in 0..MAX_RANDOM_DRAWS {
            let cell = Cell::new(
                self.rng.gen_range(0..side),
                self.rng.gen_range(0..side),
                self.rng.gen_range(0..side),
            );
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }

        // Crowded grid: choose among the remaining free cells directly
        let occupied: HashSet<Cell> = snake.cells().iter().copied().collect();
        grid.cells()
            .filter(|cell| !occupied.contains(cell))
            .choose(&mut self.rng)
    }
}
