//! Confirmation dialog state

use crate::message::Message;

/// One answer in a confirmation dialog and the message it emits
#[derive(Debug, Clone)]
pub struct Choice {
    pub label: String,
    pub emits: Message,
}

impl Choice {
    fn new(label: &str, emits: Message) -> Self {
        Self {
            label: label.to_string(),
            emits,
        }
    }
}

/// A yes/no question shown over the current view
#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub prompt: String,
    pub confirm: Choice,
    pub cancel: Choice,
}

impl ConfirmDialogState {
    /// Ask before deleting the rule for `symbol`
    pub fn delete_rule(symbol: &str) -> Self {
        Self {
            title: "Delete rule?".to_string(),
            prompt: format!("Delete the alert rule for {}?", symbol),
            confirm: Choice::new(
                "Delete",
                Message::ConfirmDelete {
                    symbol: symbol.to_string(),
                },
            ),
            cancel: Choice::new("Cancel", Message::CancelDelete),
        }
    }

    pub fn confirm_message(&self) -> Message {
        self.confirm.emits.clone()
    }

    pub fn cancel_message(&self) -> Message {
        self.cancel.emits.clone()
    }
}
