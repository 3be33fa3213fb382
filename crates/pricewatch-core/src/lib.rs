//! Domain types shared by the pricewatch crates
//!
//! - [`rule`]: alert rules keyed by ticker symbol and the request bodies that
//!   change them
//! - [`channel`]: messenger credentials and the fixed test message
//! - [`log_feed`]: backend log lines, split into stamp and body for display
//! - [`error`]: the crate-wide [`Error`], split into local and remote failures
//! - [`logging`]: file-based `tracing` setup
//!
//! Most modules start with `use pricewatch_core::prelude::*;`.

pub mod channel;
pub mod error;
pub mod log_feed;
pub mod logging;
pub mod rule;

pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use channel::{ChannelUpdate, Credentials, NotificationSettings, TestMessage, TEST_MESSAGE};
pub use error::{Error, Result, ResultExt};
pub use log_feed::{LogFeed, LogLine, LogTone};
pub use rule::{format_pct, Rule, RuleActivation, RuleDraft, RuleKey, RuleSet};
