//! Notification channel form (bot token + chat id)

use chrono::{DateTime, Local};
use pricewatch_core::{ChannelUpdate, NotificationSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelField {
    #[default]
    Token,
    ChatId,
}

impl ChannelField {
    pub fn label(&self) -> &'static str {
        match self {
            ChannelField::Token => "Bot token",
            ChannelField::ChatId => "Chat id",
        }
    }

    pub fn other(&self) -> ChannelField {
        match self {
            ChannelField::Token => ChannelField::ChatId,
            ChannelField::ChatId => ChannelField::Token,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChannelFormState {
    pub token: String,
    pub chat_id: String,
    pub focused: ChannelField,
    pub loading: bool,
    pub saving: bool,
    /// A test send is between precheck and relay answer
    pub testing: bool,
    pub last_loaded: Option<DateTime<Local>>,
}

impl ChannelFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy stored values into the fields; absent values leave a field as is
    pub fn apply_loaded(&mut self, settings: &NotificationSettings) {
        if let Some(token) = &settings.token {
            self.token = token.clone();
        }
        if let Some(chat_id) = &settings.chat_id {
            self.chat_id = chat_id.clone();
        }
        self.loading = false;
        self.last_loaded = Some(Local::now());
    }

    pub fn value(&self, field: ChannelField) -> &str {
        match field {
            ChannelField::Token => &self.token,
            ChannelField::ChatId => &self.chat_id,
        }
    }

    pub fn focused_value(&self) -> &str {
        self.value(self.focused)
    }

    pub fn set_focused(&mut self, text: String) {
        match self.focused {
            ChannelField::Token => self.token = text,
            ChannelField::ChatId => self.chat_id = text,
        }
    }

    pub fn focus_other(&mut self) {
        self.focused = self.focused.other();
    }

    /// Request body with the values exactly as typed
    pub fn update(&self) -> ChannelUpdate {
        ChannelUpdate {
            token: self.token.clone(),
            chat_id: self.chat_id.clone(),
        }
    }
}

/// Token text safe to show when the field is not being edited
pub fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = token.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_loaded_sets_present_values() {
        let mut form = ChannelFormState::new();
        form.apply_loaded(&NotificationSettings::new("123:abc", "-100"));
        assert_eq!(form.token, "123:abc");
        assert_eq!(form.chat_id, "-100");
        assert!(form.last_loaded.is_some());
    }

    #[test]
    fn test_apply_loaded_keeps_fields_for_absent_values() {
        let mut form = ChannelFormState::new();
        form.token = "typed".to_string();
        form.chat_id = "42".to_string();

        form.apply_loaded(&NotificationSettings::new("", "-100"));
        assert_eq!(form.token, "typed");
        assert_eq!(form.chat_id, "-100");
    }

    #[test]
    fn test_update_sends_values_as_typed() {
        let mut form = ChannelFormState::new();
        form.set_focused(" tok ".to_string());
        form.focus_other();
        form.set_focused(String::new());

        assert_eq!(
            form.update(),
            ChannelUpdate {
                token: " tok ".to_string(),
                chat_id: String::new(),
            }
        );
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token(""), "");
        assert_eq!(mask_token("abc"), "***");
        assert_eq!(mask_token("123456:ABCD"), "*******ABCD");
    }
}
