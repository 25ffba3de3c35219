use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ops;

/// Grid dimension; the board is always `SIZE` x `SIZE`.
pub const SIZE: usize = 4;

/// One row or column of cells in traversal order.
pub(crate) type Line = [u32; SIZE];
/// Dense row-major cell storage. Cells hold the tile value (2, 4, 8, ...);
/// zero marks an empty cell.
pub(crate) type Cells = [[u32; SIZE]; SIZE];

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Dense 4x4 2048 grid.
///
/// Cells store the actual tile value rather than an exponent, so equality
/// and rendering read straight off the matrix. The type is `Copy`: every
/// operation returns a new grid instead of mutating through references,
/// which also keeps snapshots free of mutable aliases.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid(pub(crate) Cells);

impl Grid {
    /// A constant empty grid (all zeros).
    pub const EMPTY: Grid = Grid([[0; SIZE]; SIZE]);

    /// Construct a `Grid` from a dense cell matrix.
    #[inline]
    pub fn from_cells(cells: Cells) -> Self {
        Grid(cells)
    }

    /// Copy out the dense cell matrix, row-major.
    #[inline]
    pub fn cells(self) -> Cells {
        self.0
    }

    /// The value at `(row, col)`, zero if empty.
    #[inline]
    pub fn get(self, row: usize, col: usize) -> u32 {
        self.0[row][col]
    }

    /// Return the grid resulting from sliding/merging tiles in `direction`
    /// (no random insert).
    ///
    /// ```
    /// use twenty48_engine::engine::{Direction, Grid};
    /// let g = Grid::from_cells([
    ///     [2, 2, 2, 0],
    ///     [0; 4],
    ///     [0; 4],
    ///     [0; 4],
    /// ]);
    /// assert_eq!(g.shift(Direction::Left).cells()[0], [4, 2, 0, 0]);
    /// ```
    #[inline]
    pub fn shift(self, direction: Direction) -> Self {
        ops::shift(self, direction)
    }

    /// Insert a random 2 (90%) or 4 (10%) tile into a uniformly random
    /// empty slot, using the provided RNG. No-op when the grid is full.
    ///
    /// Deterministic example using a seeded RNG:
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use twenty48_engine::engine::Grid;
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let g = Grid::EMPTY.with_random_tile(&mut rng).with_random_tile(&mut rng);
    /// assert_eq!(g.count_empty(), 14);
    /// ```
    #[inline]
    pub fn with_random_tile<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        ops::insert_random_tile(self, rng)
    }

    /// Perform a move, then insert a random tile iff the move changed the
    /// grid.
    #[inline]
    pub fn make_move<R: Rng + ?Sized>(self, direction: Direction, rng: &mut R) -> Self {
        let moved = self.shift(direction);
        if moved != self {
            moved.with_random_tile(rng)
        } else {
            self
        }
    }

    /// True when no cell is empty and no two orthogonally adjacent cells
    /// hold equal values.
    #[inline]
    pub fn is_game_over(self) -> bool {
        ops::is_game_over(self)
    }

    /// Count the number of empty cells.
    #[inline]
    pub fn count_empty(self) -> usize {
        ops::count_empty(self)
    }

    /// The highest tile value on the grid (zero on an empty grid).
    #[inline]
    pub fn highest_tile(self) -> u32 {
        ops::highest_tile(self)
    }

    /// Iterate over cell values in row-major order.
    #[inline]
    pub fn tiles(self) -> impl Iterator<Item = u32> {
        self.0.into_iter().flatten()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:?})", self.0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (idx, row) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f, "--------------------------------")?;
            }
            let cells: Vec<String> = row.iter().map(|&val| ops::format_val(val)).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

impl From<Cells> for Grid {
    fn from(cells: Cells) -> Self {
        Grid::from_cells(cells)
    }
}
