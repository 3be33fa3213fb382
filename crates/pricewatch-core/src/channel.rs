//! Notification channel settings (provider token + destination chat)

use serde::{Deserialize, Deserializer, Serialize};

/// Text delivered by the "send test message" action
pub const TEST_MESSAGE: &str = "Test from pricewatch alerts";

/// Stored notification settings as reported by `GET /api/settings`.
///
/// The backend answers `""` for values never saved; those decode as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotificationSettings {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub chat_id: Option<String>,
}

/// Borrowed view of a complete credential pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub token: &'a str,
    pub chat_id: &'a str,
}

impl NotificationSettings {
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            token: non_empty(token.into()),
            chat_id: non_empty(chat_id.into()),
        }
    }

    /// Both values, or `None` when either is missing
    pub fn credentials(&self) -> Option<Credentials<'_>> {
        Some(Credentials {
            token: self.token.as_deref()?,
            chat_id: self.chat_id.as_deref()?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.credentials().is_some()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_empty))
}

/// Body of `POST /api/settings`; values are sent exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelUpdate {
    pub token: String,
    pub chat_id: String,
}

/// Body of the backend test relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestMessage {
    pub text: String,
}

impl Default for TestMessage {
    fn default() -> Self {
        Self {
            text: TEST_MESSAGE.to_string(),
        }
    }
}
