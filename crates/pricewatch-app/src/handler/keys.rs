//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::tabs::Tab;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(state, key),
        UiMode::RuleForm => handle_key_function(key).or_else(|| handle_key_rule_form(state, key)),
        UiMode::ChannelForm => {
            handle_key_function(key).or_else(|| handle_key_channel_form(state, key))
        }
        UiMode::Normal => handle_key_function(key).or_else(|| handle_key_normal(state, key)),
    }
}

/// F1-F3 jump to a tab from anywhere but a dialog
fn handle_key_function(key: InputKey) -> Option<Message> {
    match key {
        InputKey::F(n @ 1..=3) => Tab::from_index(usize::from(n) - 1).map(Message::SelectTab),
        _ => None,
    }
}

fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let dialog = state.confirm_dialog_state.as_ref()?;
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(dialog.confirm_message()),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(dialog.cancel_message()),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char(c @ '1'..='3') => Tab::ALL
            .iter()
            .find(|tab| tab.shortcut() == c)
            .map(|tab| Message::SelectTab(*tab)),
        InputKey::Tab => Some(Message::NextTab),
        InputKey::BackTab => Some(Message::PreviousTab),
        InputKey::Esc if state.notice.is_some() => Some(Message::DismissNotice),
        _ => match state.active_tab() {
            Tab::Rules => handle_key_rules_tab(key),
            Tab::Notifications => handle_key_notifications_tab(key),
            Tab::Logs => handle_key_logs_tab(key),
        },
    }
}

fn handle_key_rules_tab(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPreviousRule),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextRule),
        InputKey::Char(' ' | 't') => Some(Message::ToggleSelectedRule),
        InputKey::Char('e') | InputKey::Enter => Some(Message::EditSelectedRule),
        InputKey::Char('d') | InputKey::Delete => Some(Message::DeleteSelectedRule),
        InputKey::Char('n' | 'a') => Some(Message::StartNewRule),
        InputKey::Char('r') => Some(Message::LoadRules),
        _ => None,
    }
}

fn handle_key_notifications_tab(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('e') | InputKey::Enter => Some(Message::EditChannel),
        InputKey::Char('s') => Some(Message::SaveChannel),
        InputKey::Char('t') => Some(Message::SendTestMessage),
        InputKey::Char('r') => Some(Message::LoadChannel),
        _ => None,
    }
}

fn handle_key_logs_tab(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') => Some(Message::LoadLogs),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollLogsUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollLogsDown),
        InputKey::PageUp => Some(Message::LogsPageUp),
        InputKey::PageDown => Some(Message::LogsPageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::LogsToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::LogsToBottom),
        _ => None,
    }
}

/// Text edits shared by both forms; `current` is the focused field's text
fn edit_text(current: &str, key: InputKey) -> Option<String> {
    match key {
        InputKey::Backspace => {
            let mut text = current.to_string();
            text.pop();
            Some(text)
        }
        InputKey::CharCtrl('u') => Some(String::new()),
        _ => key.typed_char().map(|c| {
            let mut text = current.to_string();
            text.push(c);
            text
        }),
    }
}

fn handle_key_rule_form(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FormCancel),
        InputKey::Enter => Some(Message::SubmitRuleForm),
        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPreviousField),
        _ => edit_text(state.rule_form.focused_value(), key)
            .map(|text| Message::FormInput { text }),
    }
}

fn handle_key_channel_form(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ChannelCancelEdit),
        InputKey::Enter => Some(Message::SaveChannel),
        InputKey::Tab | InputKey::Down => Some(Message::ChannelNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::ChannelPreviousField),
        _ => edit_text(state.channel_form.focused_value(), key)
            .map(|text| Message::ChannelInput { text }),
    }
}
