//! twenty48-engine: a 2048 grid engine
//!
//! This crate provides:
//! - A dense `Grid` type with ergonomic methods (`shift`, `make_move`, `is_game_over`, ...)
//! - An owning `Game` session that pairs a grid with an injectable, seedable RNG
//!
//! Quick start:
//! ```
//! use twenty48_engine::engine::{Direction, Game};
//!
//! // Deterministic game from a fixed seed: two tiles are spawned up front
//! let mut game = Game::from_seed(42);
//! assert_eq!(game.grid().count_empty(), 14);
//!
//! // One turn: slide, and iff the grid changed a new tile spawns
//! let changed = game.make_move(Direction::Left);
//! if changed {
//!     assert!(game.grid().count_empty() <= 14);
//! }
//! ```
//!
//! Working with bare grids (no spawn, fully deterministic):
//! ```
//! use twenty48_engine::engine::{Direction, Grid};
//!
//! let g = Grid::from_cells([
//!     [0, 2, 0, 2],
//!     [0; 4],
//!     [0; 4],
//!     [0; 4],
//! ]);
//! assert_eq!(g.shift(Direction::Left).cells()[0], [4, 0, 0, 0]);
//! ```

pub mod engine;
