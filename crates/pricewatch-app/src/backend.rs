//! Typed access to the alert backend
//!
//! Every component reaches the backend through this trait; the HTTP
//! implementation lives in [`crate::api`]. Both the TUI runner and tests
//! (through the in-memory backend) drive the engine via this seam.

use pricewatch_core::prelude::*;
use pricewatch_core::{ChannelUpdate, LogFeed, NotificationSettings, RuleDraft, RuleSet, TestMessage};

/// Operations the alert backend exposes
#[trait_variant::make(AlertBackend: Send)]
pub trait LocalAlertBackend {
    /// `GET /api/actions`: every rule, in backend order
    async fn fetch_rules(&self) -> Result<RuleSet>;

    /// `POST /api/add`: create or update the rule keyed by `draft.symbol`
    async fn upsert_rule(&self, draft: &RuleDraft) -> Result<()>;

    /// `POST /api/update` with `{symbol, active}`
    async fn set_active(&self, symbol: &str, active: bool) -> Result<()>;

    /// `POST /api/delete`
    async fn delete_rule(&self, symbol: &str) -> Result<()>;

    /// `GET /api/settings`
    async fn fetch_settings(&self) -> Result<NotificationSettings>;

    /// `POST /api/settings`
    async fn save_settings(&self, update: &ChannelUpdate) -> Result<()>;

    /// `GET /api/logs`
    async fn fetch_logs(&self) -> Result<LogFeed>;

    /// Ask the backend to deliver a test message with its stored credentials
    async fn send_test_message(&self, message: &TestMessage) -> Result<()>;
}
