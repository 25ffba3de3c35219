//! Board rendering for the alternate screen.
//!
//! Tile backgrounds follow the classic 2048 palette; each tile is a
//! fixed-width colored cell with its value centered, laid out on the board
//! background with a one-cell gutter.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use twenty48_engine::engine::{Grid, SIZE};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

const BOARD_BG: Color = Color::Rgb { r: 187, g: 173, b: 160 };
const TEXT: Color = Color::Rgb { r: 119, g: 110, b: 101 };

fn tile_color(value: u32) -> Color {
    let (r, g, b) = match value {
        2 => (238, 228, 218),
        4 => (237, 224, 200),
        8 => (242, 177, 121),
        16 => (245, 149, 99),
        32 => (246, 124, 95),
        64 => (246, 94, 59),
        128 => (237, 207, 114),
        256 => (237, 204, 97),
        512 => (237, 200, 80),
        1024 => (237, 197, 63),
        2048 => (237, 194, 46),
        // Empty cells, and anything past 2048, use the vacant-cell shade.
        _ => (205, 193, 180),
    };
    Color::Rgb { r, g, b }
}

fn board_width() -> u16 {
    SIZE as u16 * (CELL_WIDTH + 1) + 1
}

fn board_height() -> u16 {
    SIZE as u16 * (CELL_HEIGHT + 1) + 1
}

/// Draw the whole board.
pub fn draw<W: Write>(out: &mut W, grid: Grid) -> io::Result<()> {
    queue!(out, ResetColor, Clear(ClearType::All))?;
    queue!(out, SetBackgroundColor(BOARD_BG))?;
    for y in 0..board_height() {
        queue!(out, MoveTo(0, y), Print(" ".repeat(board_width() as usize)))?;
    }
    for row in 0..SIZE {
        for col in 0..SIZE {
            draw_tile(out, row, col, grid.get(row, col))?;
        }
    }
    queue!(
        out,
        ResetColor,
        MoveTo(0, board_height() + 1),
        Print("arrow keys / wasd to slide, q to quit"),
    )?;
    out.flush()
}

fn draw_tile<W: Write>(out: &mut W, row: usize, col: usize, value: u32) -> io::Result<()> {
    let x = col as u16 * (CELL_WIDTH + 1) + 1;
    let y = row as u16 * (CELL_HEIGHT + 1) + 1;
    queue!(out, SetBackgroundColor(tile_color(value)), SetForegroundColor(TEXT))?;
    for line in 0..CELL_HEIGHT {
        queue!(out, MoveTo(x, y + line))?;
        if line == CELL_HEIGHT / 2 {
            queue!(out, Print(cell_label(value)))?;
        } else {
            queue!(out, Print(" ".repeat(CELL_WIDTH as usize)))?;
        }
    }
    Ok(())
}

fn cell_label(value: u32) -> String {
    if value == 0 {
        " ".repeat(CELL_WIDTH as usize)
    } else {
        format!("{:^width$}", value, width = CELL_WIDTH as usize)
    }
}

/// Banner drawn once the grid reaches its terminal state.
pub fn draw_game_over<W: Write>(out: &mut W, highest_tile: u32) -> io::Result<()> {
    queue!(
        out,
        ResetColor,
        MoveTo(0, board_height() + 1),
        Clear(ClearType::CurrentLine),
        Print(format!(
            "Game Over! Highest tile: {}. Press any key to exit.",
            highest_tile
        )),
    )?;
    out.flush()
}
