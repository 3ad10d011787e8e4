//! Key mapping from terminal events to game actions and frontend commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Persisted frontend switches the player can flip from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    TouchLock,
    Voice,
    KidMode,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::SoftDrop),

        // Rotation (clockwise only)
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Map keyboard input to a settings switch.
pub fn settings_toggle(key: KeyEvent) -> Option<Toggle> {
    match key.code {
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Toggle::TouchLock),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(Toggle::Voice),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(Toggle::KidMode),
        _ => None,
    }
}

/// Check if key should (re)open the how-to-play guide.
pub fn is_guide_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::F(1))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
