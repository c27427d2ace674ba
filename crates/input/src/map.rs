//! Key mapping from terminal events to game keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The keys the game listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Left,
    Right,
    Rotate,
    Drop,
}

impl GameKey {
    pub const ALL: [GameKey; 4] = [GameKey::Left, GameKey::Right, GameKey::Rotate, GameKey::Drop];

    pub(crate) fn index(self) -> usize {
        match self {
            GameKey::Left => 0,
            GameKey::Right => 1,
            GameKey::Rotate => 2,
            GameKey::Drop => 3,
        }
    }
}

/// Map a key code to a game key.
pub fn map_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameKey::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameKey::Right)
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameKey::Rotate)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameKey::Drop)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
