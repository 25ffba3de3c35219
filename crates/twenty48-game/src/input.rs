//! Terminal input mapping.
//!
//! Maps `crossterm` key events into [`GameAction`]s. Kept independent of
//! the render layer so the mapping is testable without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use twenty48_engine::engine::Direction;

/// What a key event asks the game loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Slide(Direction),
    Quit,
}

/// Map a key event to an action. Releases, repeats, and unbound keys map
/// to `None`.
pub fn handle_key_event(event: KeyEvent) -> Option<GameAction> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameAction::Quit);
    }
    match event.code {
        KeyCode::Left | KeyCode::Char('a') => Some(GameAction::Slide(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameAction::Slide(Direction::Right)),
        KeyCode::Up | KeyCode::Char('w') => Some(GameAction::Slide(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameAction::Slide(Direction::Down)),
        KeyCode::Esc | KeyCode::Char('q') => Some(GameAction::Quit),
        _ => None,
    }
}
