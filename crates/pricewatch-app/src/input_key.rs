//! Keyboard input as seen by the engine.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the key handlers in this crate never depend on a terminal library.

/// A key press, stripped of terminal-specific detail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (shift already applied)
    Char(char),
    /// Character pressed together with Ctrl
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Whether this key types a character into a text field
    pub fn typed_char(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }
}
