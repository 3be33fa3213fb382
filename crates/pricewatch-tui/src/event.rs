//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pricewatch_app::input_key::InputKey;
use pricewatch_app::Message;
use pricewatch_core::prelude::*;

/// How long one poll waits before producing a `Tick`
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert a crossterm key event into the engine's key type
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(c) if ctrl => Some(InputKey::CharCtrl(c)),
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Translate one terminal event; only key presses matter
pub fn translate(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        _ => None,
    }
}

/// Wait briefly for a terminal event.
///
/// A timeout yields `Message::Tick` so notices can expire while idle.
pub fn poll() -> Result<Option<Message>> {
    let ready = event::poll(POLL_INTERVAL).map_err(|e| terminal_failure("poll", e))?;
    if !ready {
        return Ok(Some(Message::Tick));
    }
    let event = event::read().map_err(|e| terminal_failure("read", e))?;
    Ok(translate(event))
}

/// Terminal I/O failure while doing `action`
pub fn terminal_failure(action: &str, err: std::io::Error) -> Error {
    Error::terminal(format!("{} failed: {}", action, err))
}
