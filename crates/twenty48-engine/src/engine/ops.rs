use rand::Rng;

use super::state::{Direction, Grid, Line, SIZE};

/// Slide/merge tiles in the given direction. No randomness.
pub fn shift(grid: Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left | Direction::Right => shift_rows(grid, direction),
        Direction::Up | Direction::Down => shift_cols(grid, direction),
    }
}

fn shift_rows(grid: Grid, direction: Direction) -> Grid {
    let mut cells = grid.0;
    for row in cells.iter_mut() {
        *row = shift_line(*row, direction == Direction::Right);
    }
    Grid(cells)
}

fn shift_cols(grid: Grid, direction: Direction) -> Grid {
    let mut cells = grid.0;
    for col in 0..SIZE {
        let mut line: Line = [0; SIZE];
        for row in 0..SIZE {
            line[row] = cells[row][col];
        }
        let line = shift_line(line, direction == Direction::Down);
        for row in 0..SIZE {
            cells[row][col] = line[row];
        }
    }
    Grid(cells)
}

/// Collapse one line toward its traversal start. `reversed` flips the line
/// so the same scan serves Right/Down.
fn shift_line(mut line: Line, reversed: bool) -> Line {
    if reversed {
        line.reverse();
    }
    let mut out = collapse_line(line);
    if reversed {
        out.reverse();
    }
    out
}

/// Single-pass compaction and merge: non-zero tiles keep their relative
/// order, equal neighbours combine once, zeros pad the far end. A tile
/// produced by a merge never merges again within the same move, so
/// [2, 2, 2, 0] becomes [4, 2, 0, 0].
pub(crate) fn collapse_line(line: Line) -> Line {
    let mut out: Line = [0; SIZE];
    let mut len = 0;
    let mut merged = false;
    for &val in line.iter().filter(|&&cell| cell != 0) {
        if len > 0 && !merged && out[len - 1] == val {
            out[len - 1] = val * 2;
            merged = true;
        } else {
            out[len] = val;
            len += 1;
            merged = false;
        }
    }
    out
}

/// True if no cell is empty and no two orthogonally adjacent cells hold
/// equal values. Horizontal and vertical neighbours are checked with their
/// own indices.
pub fn is_game_over(grid: Grid) -> bool {
    for row in 0..SIZE {
        for col in 0..SIZE {
            let val = grid.0[row][col];
            if val == 0 {
                return false;
            }
            if col + 1 < SIZE && grid.0[row][col + 1] == val {
                return false;
            }
            if row + 1 < SIZE && grid.0[row + 1][col] == val {
                return false;
            }
        }
    }
    true
}

/// Count the number of empty cells.
pub fn count_empty(grid: Grid) -> usize {
    grid.0.iter().flatten().filter(|&&cell| cell == 0).count()
}

/// Insert a random 2 (90%) or 4 (10%) tile into a uniformly random empty
/// slot, using the provided RNG. Returns the grid unchanged when full.
pub fn insert_random_tile<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Grid {
    let empty = count_empty(grid);
    if empty == 0 {
        return grid;
    }
    let mut index = rng.gen_range(0..empty);
    let tile = generate_random_tile(rng);
    let mut cells = grid.0;
    for cell in cells.iter_mut().flatten() {
        if *cell != 0 {
            continue;
        }
        if index == 0 {
            *cell = tile;
            break;
        }
        index -= 1;
    }
    Grid(cells)
}

pub(crate) fn generate_random_tile<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..10) < 9 {
        2
    } else {
        4
    }
}

/// The highest tile value present (zero on an empty grid).
pub fn highest_tile(grid: Grid) -> u32 {
    grid.0.iter().flatten().copied().max().unwrap_or(0)
}

pub(crate) fn format_val(val: u32) -> String {
    match val {
        0 => String::from("       "),
        x => {
            let mut x = x.to_string();
            while x.len() < 7 {
                match x.len() {
                    6 => x = format!(" {}", x),
                    _ => x = format!(" {} ", x),
                }
            }
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn it_collapse_line() {
        assert_eq!(collapse_line([0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(collapse_line([2, 4, 2, 4]), [2, 4, 2, 4]);
        assert_eq!(collapse_line([2, 2, 4, 4]), [4, 8, 0, 0]);
        assert_eq!(collapse_line([2, 0, 0, 2]), [4, 0, 0, 0]);
        assert_eq!(collapse_line([0, 2, 2, 2]), [4, 2, 0, 0]);
    }

    #[test]
    fn it_collapse_single_pass() {
        // Three equal tiles merge only the first pair.
        assert_eq!(collapse_line([2, 2, 2, 0]), [4, 2, 0, 0]);
        // Two pairs merge independently, never cascading into an 8.
        assert_eq!(collapse_line([2, 2, 2, 2]), [4, 4, 0, 0]);
        assert_eq!(collapse_line([4, 2, 2, 0]), [4, 4, 0, 0]);
    }

    #[test]
    fn test_shift_left() {
        let grid = Grid::from_cells([
            [0, 2, 0, 2],
            [2, 2, 4, 4],
            [2, 4, 8, 16],
            [0, 0, 0, 2],
        ]);
        assert_eq!(
            shift(grid, Direction::Left),
            Grid::from_cells([
                [4, 0, 0, 0],
                [4, 8, 0, 0],
                [2, 4, 8, 16],
                [2, 0, 0, 0],
            ])
        );
    }

    #[test]
    fn test_shift_right() {
        let grid = Grid::from_cells([
            [0, 2, 0, 2],
            [2, 2, 4, 4],
            [2, 4, 8, 16],
            [0, 0, 0, 2],
        ]);
        assert_eq!(
            shift(grid, Direction::Right),
            Grid::from_cells([
                [0, 0, 0, 4],
                [0, 0, 4, 8],
                [2, 4, 8, 16],
                [0, 0, 0, 2],
            ])
        );
    }

    #[test]
    fn test_shift_up() {
        let grid = Grid::from_cells([
            [2, 0, 0, 2],
            [0, 2, 0, 2],
            [2, 0, 4, 4],
            [4, 2, 0, 0],
        ]);
        assert_eq!(
            shift(grid, Direction::Up),
            Grid::from_cells([
                [4, 4, 4, 4],
                [4, 0, 0, 4],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ])
        );
    }

    #[test]
    fn test_shift_down() {
        let grid = Grid::from_cells([
            [2, 0, 0, 2],
            [0, 2, 0, 2],
            [2, 0, 4, 4],
            [4, 2, 0, 0],
        ]);
        assert_eq!(
            shift(grid, Direction::Down),
            Grid::from_cells([
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [4, 0, 0, 4],
                [4, 4, 4, 4],
            ])
        );
    }

    #[test]
    fn test_shift_no_change() {
        // Already compact, no mergeable neighbours: every direction that
        // keeps the tiles flush is a strict no-op.
        let grid = Grid::from_cells([
            [2, 4, 0, 0],
            [4, 2, 0, 0],
            [2, 4, 0, 0],
            [4, 2, 0, 0],
        ]);
        assert_eq!(shift(grid, Direction::Left), grid);
        assert_eq!(shift(grid, Direction::Up), grid);
        assert_ne!(shift(grid, Direction::Right), grid);
    }

    #[test]
    fn it_insert_random_tile() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = Grid::EMPTY;
        for _ in 0..16 {
            grid = insert_random_tile(grid, &mut rng);
        }
        assert_eq!(count_empty(grid), 0);
        for val in grid.tiles() {
            assert!(val == 2 || val == 4);
        }
    }

    #[test]
    fn it_insert_into_full_grid_is_noop() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = Grid::from_cells([[2; SIZE]; SIZE]);
        assert_eq!(insert_random_tile(grid, &mut rng), grid);
    }

    #[test]
    fn it_insert_fills_exactly_one_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = insert_random_tile(Grid::EMPTY, &mut rng);
        assert_eq!(count_empty(grid), 15);
        let spawned: Vec<u32> = grid.tiles().filter(|&val| val != 0).collect();
        assert!(spawned == [2] || spawned == [4]);
    }

    #[test]
    fn it_game_over_checkerboard() {
        let grid = Grid::from_cells([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(is_game_over(grid));
    }

    #[test]
    fn it_not_game_over_with_empty_cell() {
        let grid = Grid::from_cells([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 0],
        ]);
        assert!(!is_game_over(grid));
    }

    #[test]
    fn it_not_game_over_with_horizontal_pair() {
        let grid = Grid::from_cells([
            [2, 2, 4, 8],
            [4, 8, 16, 32],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
        ]);
        assert!(!is_game_over(grid));
    }

    #[test]
    fn it_not_game_over_with_vertical_pair() {
        let grid = Grid::from_cells([
            [2, 4, 2, 4],
            [2, 8, 16, 32],
            [4, 2, 4, 2],
            [8, 4, 8, 4],
        ]);
        assert!(!is_game_over(grid));
    }

    #[test]
    fn it_count_empty() {
        assert_eq!(count_empty(Grid::EMPTY), 16);
        let grid = Grid::from_cells([
            [2, 2, 2, 2],
            [0, 0, 0, 0],
            [2, 2, 2, 2],
            [0, 0, 0, 0],
        ]);
        assert_eq!(count_empty(grid), 8);
    }

    #[test]
    fn it_highest_tile() {
        assert_eq!(highest_tile(Grid::EMPTY), 0);
        let grid = Grid::from_cells([
            [2, 4, 0, 0],
            [0, 128, 0, 0],
            [0, 0, 8, 0],
            [0, 0, 0, 16],
        ]);
        assert_eq!(highest_tile(grid), 128);
    }

    #[test]
    fn it_format_val() {
        assert_eq!(format_val(0), "       ");
        assert_eq!(format_val(2), "   2   ");
        assert_eq!(format_val(2048), "  2048 ");
    }
}
