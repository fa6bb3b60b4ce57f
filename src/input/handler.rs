use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(Key),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // XY plane - WASD
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Game(Key::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Game(Key::Right),
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Game(Key::Forward),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Game(Key::Back),

            // XY plane - horizontal arrows
            KeyCode::Left => KeyAction::Game(Key::Left),
            KeyCode::Right => KeyAction::Game(Key::Right),

            // Z axis - vertical arrows
            KeyCode::Up => KeyAction::Game(Key::Up),
            KeyCode::Down => KeyAction::Game(Key::Down),

            // Controls
            KeyCode::Enter => KeyAction::Game(Key::Confirm),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
