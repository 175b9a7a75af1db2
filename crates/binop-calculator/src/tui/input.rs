//! Keyboard input handling
//!
//! Maps crossterm key events to [`KeyAction`]s. Whether `-` types a sign or
//! subtracts depends on the focused field, so that choice is left to the
//! app.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Operation;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Type a character into the focused operand
    InsertChar(char),
    /// Operator key (`-` may still become a sign)
    Operator(Operation),
    /// Repeat the last successful operation
    Replay,
    /// Focus the next operand
    NextField,
    /// Focus the previous operand
    PrevField,
    /// Delete the last character of the focused operand
    Backspace,
    /// Empty the focused operand
    ClearField,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => match Operation::from_char(c) {
                Some(op) => KeyAction::Operator(op),
                None if Self::is_operand_char(c) => KeyAction::InsertChar(c),
                None => KeyAction::None,
            },
            KeyCode::Enter => KeyAction::Replay,
            KeyCode::Tab | KeyCode::Down => KeyAction::NextField,
            KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Esc => KeyAction::ClearField,
            _ => KeyAction::None,
        }
    }

    /// Characters that can appear in operand text
    #[must_use]
    pub fn is_operand_char(c: char) -> bool {
        c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::InsertChar(c)
            );
        }
    }

    #[test]
    fn test_handle_decimal_and_exponent() {
        let handler = InputHandler::new();
        for c in ['.', 'e', 'E'] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::InsertChar(c)
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operation::ALL {
            let c = op.symbol().chars().next().unwrap();
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Operator(op)
            );
        }
    }

    #[test]
    fn test_letters_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('x'))),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_handle_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Replay
        );
    }

    #[test]
    fn test_handle_focus_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Tab)),
            KeyAction::NextField
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Down)),
            KeyAction::NextField
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::BackTab)),
            KeyAction::PrevField
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Up)),
            KeyAction::PrevField
        );
    }

    #[test]
    fn test_handle_edit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Backspace
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::ClearField
        );
    }

    #[test]
    fn test_handle_ctrl_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('1'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    #[test]
    fn test_unmapped_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::F(1))),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Left)),
            KeyAction::None
        );
    }
}
