//! Action handlers: UpdateAction dispatch and background request spawning
//!
//! Each action becomes one spawned task that performs a single backend call
//! and reports the outcome as a [`Message`]. Completion order is the order
//! messages reach the event loop.

use std::sync::Arc;

use pricewatch_core::prelude::*;
use tokio::sync::{mpsc, watch};

use crate::backend::AlertBackend;
use crate::handler::{ChannelFetch, UpdateAction};
use crate::message::{Message, RuleChange};

/// Execute an action by spawning a background task
pub fn handle_action<B>(
    action: UpdateAction,
    backend: Arc<B>,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    B: AlertBackend + Sync + 'static,
{
    tokio::spawn(async move {
        tokio::select! {
            msg = execute(action, backend.as_ref()) => {
                if msg_tx.send(msg).await.is_err() {
                    debug!("Message channel closed, dropping request outcome");
                }
            }
            _ = shutdown_rx.changed() => {
                debug!("Request abandoned at shutdown");
            }
        }
    });
}

/// Perform the backend call for `action` and map its outcome to a message
async fn execute<B: AlertBackend>(action: UpdateAction, backend: &B) -> Message {
    match action {
        UpdateAction::FetchRules => match backend.fetch_rules().await {
            Ok(rules) => Message::RulesLoaded { rules },
            Err(e) => {
                report("Failed to load rules", &e);
                Message::RulesLoadFailed {
                    error: e.to_string(),
                }
            }
        },

        UpdateAction::UpsertRule { draft } => {
            let change = RuleChange::Upserted {
                symbol: draft.symbol.clone(),
            };
            mutation_outcome(change, backend.upsert_rule(&draft).await)
        }

        UpdateAction::SetRuleActive { symbol, active } => {
            let result = backend.set_active(&symbol, active).await;
            mutation_outcome(RuleChange::Toggled { symbol, active }, result)
        }

        UpdateAction::DeleteRule { symbol } => {
            let result = backend.delete_rule(&symbol).await;
            mutation_outcome(RuleChange::Deleted { symbol }, result)
        }

        UpdateAction::FetchChannel { purpose } => {
            let result = backend.fetch_settings().await;
            match (purpose, result) {
                (ChannelFetch::Populate, Ok(settings)) => Message::ChannelLoaded { settings },
                (ChannelFetch::TestPrecheck, Ok(settings)) => {
                    Message::TestPrecheckLoaded { settings }
                }
                (ChannelFetch::Populate, Err(e)) => {
                    report("Failed to load notification settings", &e);
                    Message::ChannelLoadFailed {
                        error: e.to_string(),
                    }
                }
                (ChannelFetch::TestPrecheck, Err(e)) => {
                    report("Credential check before test send failed", &e);
                    Message::TestPrecheckFailed {
                        error: e.to_string(),
                    }
                }
            }
        }

        UpdateAction::SaveChannel { update } => match backend.save_settings(&update).await {
            Ok(()) => {
                info!("Notification settings saved");
                Message::ChannelSaved
            }
            Err(e) => {
                report("Failed to save notification settings", &e);
                Message::ChannelSaveFailed {
                    error: e.to_string(),
                }
            }
        },

        UpdateAction::SendTestMessage { message } => {
            match backend.send_test_message(&message).await {
                Ok(()) => {
                    info!("Test message relayed");
                    Message::TestMessageSent
                }
                Err(e) => {
                    report("Test message failed", &e);
                    Message::TestMessageFailed {
                        error: e.to_string(),
                    }
                }
            }
        }

        UpdateAction::FetchLogs => match backend.fetch_logs().await {
            Ok(feed) => Message::LogsLoaded { feed },
            Err(e) => {
                report("Failed to load logs", &e);
                Message::LogsLoadFailed {
                    error: e.to_string(),
                }
            }
        },
    }
}

/// Remote failures are expected while the backend is away; anything else is a bug
fn report(what: &str, e: &Error) {
    if e.is_remote() {
        warn!("{}: {}", what, e);
    } else {
        error!("{}: {}", what, e);
    }
}

fn mutation_outcome(change: RuleChange, result: Result<()>) -> Message {
    match result {
        Ok(()) => {
            info!("{}", change.describe());
            Message::RuleMutationApplied { change }
        }
        Err(e) => {
            report(&format!("Rule change for {} failed", change.symbol()), &e);
            Message::RuleMutationFailed {
                change,
                error: e.to_string(),
            }
        }
    }
}
