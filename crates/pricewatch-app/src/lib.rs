//! pricewatch-app - Application state and orchestration for pricewatch
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! control panel: messages, the update function, view state for the rule
//! list, rule form, notification channel and log feed, plus the Engine that
//! turns update actions into backend requests.

pub mod actions;
pub mod api;
pub mod backend;
pub mod channel_form;
pub mod config;
pub mod confirm_dialog;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod log_feed_state;
pub mod message;
pub mod notice;
pub mod process;
pub mod rule_form;
pub mod rule_list;
pub mod signals;
pub mod state;
pub mod tabs;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

// Re-export primary types
pub use api::{ApiClient, HttpBackend};
pub use backend::{AlertBackend, LocalAlertBackend};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{AppState, UiMode};
pub use tabs::{Tab, TabController};
