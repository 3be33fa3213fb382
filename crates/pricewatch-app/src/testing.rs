//! In-memory alert backend and engine helpers for tests
//!
//! [`InMemoryBackend`] mimics the backend's storage rules: adding a rule is an
//! upsert that re-activates it, toggling an unknown symbol is a 404, and every
//! change writes a stamped line to the newest-first log. Every call is
//! recorded so tests can assert how many requests an interaction produced.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::Local;
use pricewatch_core::prelude::*;
use pricewatch_core::{
    ChannelUpdate, LogFeed, NotificationSettings, Rule, RuleDraft, RuleSet, TestMessage,
};

use crate::api::endpoints;
use crate::backend::AlertBackend;
use crate::engine::Engine;

/// How long [`settle`] waits for another message before returning
const SETTLE_IDLE: Duration = Duration::from_millis(200);

/// One backend call as the in-memory backend received it
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    FetchRules,
    UpsertRule(RuleDraft),
    SetActive { symbol: String, active: bool },
    DeleteRule(String),
    FetchSettings,
    SaveSettings(ChannelUpdate),
    FetchLogs,
    SendTestMessage(TestMessage),
}

impl RecordedCall {
    /// Whether this call changes stored rules
    pub fn is_rule_mutation(&self) -> bool {
        matches!(
            self,
            RecordedCall::UpsertRule(_) | RecordedCall::SetActive { .. } | RecordedCall::DeleteRule(_)
        )
    }
}

#[derive(Debug, Default)]
struct Store {
    rules: RuleSet,
    settings: NotificationSettings,
    /// Newest first
    logs: Vec<String>,
    calls: Vec<RecordedCall>,
    offline: bool,
}

impl Store {
    fn log(&mut self, text: String) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M");
        self.logs.insert(0, format!("[{}] {}", stamp, text));
    }
}

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    store: Mutex<Store>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let backend = Self::new();
        backend.lock().rules = rules.into_iter().collect();
        backend
    }

    pub fn set_settings(&self, settings: NotificationSettings) {
        self.lock().settings = settings;
    }

    /// Replace the log, newest line first
    pub fn set_logs(&self, lines: Vec<String>) {
        self.lock().logs = lines;
    }

    /// While offline every call is recorded and then fails as a transport error
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    pub fn rules(&self) -> RuleSet {
        self.lock().rules.clone()
    }

    pub fn settings(&self) -> NotificationSettings {
        self.lock().settings.clone()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    pub fn mutation_count(&self) -> usize {
        self.lock().calls.iter().filter(|c| c.is_rule_mutation()).count()
    }

    pub fn test_messages(&self) -> Vec<TestMessage> {
        self.lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                RecordedCall::SendTestMessage(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record `call`; fails when offline
    fn begin(&self, call: RecordedCall, endpoint: &str) -> Result<MutexGuard<'_, Store>> {
        let mut store = self.lock();
        store.calls.push(call);
        if store.offline {
            return Err(Error::transport(endpoint, "connection refused"));
        }
        Ok(store)
    }
}

impl AlertBackend for InMemoryBackend {
    async fn fetch_rules(&self) -> Result<RuleSet> {
        let store = self.begin(RecordedCall::FetchRules, endpoints::RULES)?;
        Ok(store.rules.clone())
    }

    async fn upsert_rule(&self, draft: &RuleDraft) -> Result<()> {
        let mut store = self.begin(RecordedCall::UpsertRule(draft.clone()), endpoints::ADD_RULE)?;
        let rule = draft.clone().into_rule(true);
        store.log(format!(
            "Rule {} saved (base={:?}, up={}, down={})",
            rule.symbol, rule.base_price, rule.up, rule.down
        ));
        store.rules.insert(rule);
        Ok(())
    }

    async fn set_active(&self, symbol: &str, active: bool) -> Result<()> {
        let mut store = self.begin(
            RecordedCall::SetActive {
                symbol: symbol.to_string(),
                active,
            },
            endpoints::UPDATE_RULE,
        )?;
        match store.rules.get_mut(symbol) {
            Some(rule) => rule.active = active,
            None => return Err(Error::backend(endpoints::UPDATE_RULE, 404, "Rule not found")),
        }
        store.log(format!("Rule {} updated", symbol));
        Ok(())
    }

    async fn delete_rule(&self, symbol: &str) -> Result<()> {
        let mut store = self.begin(
            RecordedCall::DeleteRule(symbol.to_string()),
            endpoints::DELETE_RULE,
        )?;
        store.rules.remove(symbol);
        store.log(format!("Rule {} deleted", symbol));
        Ok(())
    }

    async fn fetch_settings(&self) -> Result<NotificationSettings> {
        let store = self.begin(RecordedCall::FetchSettings, endpoints::SETTINGS)?;
        Ok(store.settings.clone())
    }

    async fn save_settings(&self, update: &ChannelUpdate) -> Result<()> {
        let mut store = self.begin(RecordedCall::SaveSettings(update.clone()), endpoints::SETTINGS)?;
        store.settings = NotificationSettings::new(update.token.clone(), update.chat_id.clone());
        store.log("Notification settings updated".to_string());
        Ok(())
    }

    async fn fetch_logs(&self) -> Result<LogFeed> {
        let store = self.begin(RecordedCall::FetchLogs, endpoints::LOGS)?;
        Ok(LogFeed::new(store.logs.clone()))
    }

    async fn send_test_message(&self, message: &TestMessage) -> Result<()> {
        let store = self.begin(RecordedCall::SendTestMessage(message.clone()), "/api/test")?;
        if !store.settings.is_complete() {
            return Err(Error::backend("/api/test", 400, "Missing token or chat id"));
        }
        Ok(())
    }
}

/// Process messages until none arrives for a short idle period.
///
/// Returns the number of messages processed.
pub async fn settle<B>(engine: &mut Engine<B>) -> usize
where
    B: AlertBackend + Sync + 'static,
{
    let mut count = 0;
    while let Ok(Some(msg)) = tokio::time::timeout(SETTLE_IDLE, engine.msg_rx.recv()).await {
        engine.process_message(msg);
        count += 1;
    }
    count
}
