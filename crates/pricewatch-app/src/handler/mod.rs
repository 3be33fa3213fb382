//! The update half of the TEA loop
//!
//! [`update`] dispatches each [`Message`] to the per-view handlers in
//! `rules`, `channel` and `logs`; `keys` maps key presses per [`crate::UiMode`].

pub(crate) mod channel;
pub(crate) mod keys;
pub(crate) mod logs;
pub(crate) mod rules;
pub(crate) mod update;


use pricewatch_core::{ChannelUpdate, RuleDraft, TestMessage};

use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Why the notification settings are being fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelFetch {
    /// Fill the form fields
    Populate,
    /// Check credentials before a test send
    TestPrecheck,
}

/// Backend requests the event loop should spawn after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    FetchRules,
    UpsertRule { draft: RuleDraft },
    SetRuleActive { symbol: String, active: bool },
    DeleteRule { symbol: String },
    FetchChannel { purpose: ChannelFetch },
    SaveChannel { update: ChannelUpdate },
    SendTestMessage { message: TestMessage },
    FetchLogs,
}

/// What [`update`] wants done next: a message to feed straight back in and/or
/// a backend request to spawn
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            ..Self::default()
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }
}
