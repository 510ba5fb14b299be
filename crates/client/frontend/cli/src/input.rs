//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use battle_core::BattleConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Attack with the player's move in this slot.
    Attack(usize),
    /// Let the opponent take its pending turn.
    OpponentMove,
    SaveDatabase,
    LoadDatabase,
    SaveFile,
    LoadFile,
    Reset,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into battle commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter => KeyAction::OpponentMove,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        if let Some(digit) = raw.to_digit(10)
            && (1..=BattleConfig::MOVES_PER_COMBATANT as u32).contains(&digit)
        {
            return KeyAction::Attack(digit as usize - 1);
        }

        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'n' | ' ' => KeyAction::OpponentMove,
            's' => KeyAction::SaveDatabase,
            'l' => KeyAction::LoadDatabase,
            'f' => KeyAction::SaveFile,
            'o' => KeyAction::LoadFile,
            'r' => KeyAction::Reset,
            _ => KeyAction::None,
        }
    }
}
