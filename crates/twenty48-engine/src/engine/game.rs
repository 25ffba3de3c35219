use rand::rngs::StdRng;
use rand::SeedableRng;

use super::state::{Direction, Grid};

/// An owned 2048 session: the grid plus the RNG that feeds tile spawns.
///
/// The RNG is injected at construction, so a whole game replays
/// identically from its seed. A fresh session starts from an empty grid
/// with two spawned tiles.
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    rng: StdRng,
}

impl Game {
    /// Start a new game seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Start a reproducible game from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let grid = Grid::EMPTY
            .with_random_tile(&mut rng)
            .with_random_tile(&mut rng);
        Game { grid, rng }
    }

    /// Read-only snapshot of the current grid.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Apply one move. Returns true iff the grid changed; a changing move
    /// also spawns exactly one new tile before returning. An unchanged
    /// grid is left untouched and consumes no randomness.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        let moved = self.grid.shift(direction);
        if moved == self.grid {
            return false;
        }
        self.grid = moved.with_random_tile(&mut self.rng);
        true
    }

    /// True when no cell is empty and no adjacent pair can merge.
    pub fn is_over(&self) -> bool {
        self.grid.is_game_over()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
