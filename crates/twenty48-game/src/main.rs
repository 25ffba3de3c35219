mod input;
mod render;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use twenty48_engine::engine::Game;

use crate::input::GameAction;

/// Terminal 2048: slide tiles with the arrow keys until the board locks up.
#[derive(Parser, Debug)]
struct Args {
    /// Seed for the tile spawner; omit for a fresh game every run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let game = match args.seed {
        Some(seed) => {
            log::info!("starting seeded game (seed {seed})");
            Game::from_seed(seed)
        }
        None => Game::new(),
    };

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
    execute!(stdout, EnterAlternateScreen, Hide).context("failed to enter alternate screen")?;

    let result = run(&mut stdout, game);

    // Restore the terminal even when the loop failed.
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, mut game: Game) -> anyhow::Result<()> {
    loop {
        render::draw(out, game.grid()).context("failed to draw the board")?;

        if game.is_over() {
            render::draw_game_over(out, game.grid().highest_tile())
                .context("failed to draw the game-over banner")?;
            wait_for_key()?;
            return Ok(());
        }

        match next_action()? {
            GameAction::Quit => return Ok(()),
            GameAction::Slide(direction) => {
                let changed = game.make_move(direction);
                log::debug!("move {:?}: changed={} grid={}", direction, changed, game.grid());
            }
        }
    }
}

/// Block until a key event maps to an action.
fn next_action() -> anyhow::Result<GameAction> {
    loop {
        if let Event::Key(key) = event::read().context("failed to read terminal event")? {
            if let Some(action) = input::handle_key_event(key) {
                return Ok(action);
            }
        }
    }
}

/// Block until any key press (game-over acknowledgement).
fn wait_for_key() -> anyhow::Result<()> {
    loop {
        if let Event::Key(key) = event::read().context("failed to read terminal event")? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
