//! Message types for the application (TEA pattern)

use pricewatch_core::{LogFeed, NotificationSettings, RuleSet};

use crate::input_key::InputKey;
use crate::rule_form::RulePrefill;
use crate::tabs::Tab;

/// A rule mutation the backend acknowledged or refused
#[derive(Debug, Clone, PartialEq)]
pub enum RuleChange {
    Upserted { symbol: String },
    Toggled { symbol: String, active: bool },
    Deleted { symbol: String },
}

impl RuleChange {
    pub fn symbol(&self) -> &str {
        match self {
            RuleChange::Upserted { symbol }
            | RuleChange::Toggled { symbol, .. }
            | RuleChange::Deleted { symbol } => symbol,
        }
    }

    /// Past-tense summary for the status line
    pub fn describe(&self) -> String {
        match self {
            RuleChange::Upserted { symbol } => format!("Saved rule {}", symbol),
            RuleChange::Toggled { symbol, active: true } => format!("Activated {}", symbol),
            RuleChange::Toggled {
                symbol,
                active: false,
            } => format!("Deactivated {}", symbol),
            RuleChange::Deleted { symbol } => format!("Deleted {}", symbol),
        }
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick (notice expiry)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────
    SelectTab(Tab),
    NextTab,
    PreviousTab,

    // ─────────────────────────────────────────────────────────
    // Rule List
    // ─────────────────────────────────────────────────────────
    /// Fetch the rule set and re-render the cards
    LoadRules,
    RulesLoaded { rules: RuleSet },
    RulesLoadFailed { error: String },

    SelectNextRule,
    SelectPreviousRule,

    /// Fire the toggle binding of the selected card
    ToggleSelectedRule,
    /// Fire the edit binding of the selected card
    EditSelectedRule,
    /// Fire the delete binding of the selected card
    DeleteSelectedRule,

    /// Set a rule's activity flag on the backend
    ToggleRule { symbol: String, active: bool },
    /// Ask for confirmation before deleting
    RequestDelete { symbol: String },
    ConfirmDelete { symbol: String },
    CancelDelete,

    RuleMutationApplied { change: RuleChange },
    RuleMutationFailed { change: RuleChange, error: String },

    // ─────────────────────────────────────────────────────────
    // Rule Form
    // ─────────────────────────────────────────────────────────
    /// Load a rule into the form for editing
    PrefillForm(RulePrefill),
    /// Focus the form for a new rule (fields untouched)
    StartNewRule,
    /// Replace the focused field's text
    FormInput { text: String },
    FormNextField,
    FormPreviousField,
    /// Leave the form without clearing it
    FormCancel,
    SubmitRuleForm,

    // ─────────────────────────────────────────────────────────
    // Notification Channel
    // ─────────────────────────────────────────────────────────
    LoadChannel,
    ChannelLoaded { settings: NotificationSettings },
    ChannelLoadFailed { error: String },

    EditChannel,
    ChannelInput { text: String },
    ChannelNextField,
    ChannelPreviousField,
    ChannelCancelEdit,

    SaveChannel,
    ChannelSaved,
    ChannelSaveFailed { error: String },

    /// Start the test-send flow (credential precheck first)
    SendTestMessage,
    TestPrecheckLoaded { settings: NotificationSettings },
    TestPrecheckFailed { error: String },
    TestMessageSent,
    TestMessageFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Log Feed
    // ─────────────────────────────────────────────────────────
    LoadLogs,
    LogsLoaded { feed: LogFeed },
    LogsLoadFailed { error: String },

    ScrollLogsUp,
    ScrollLogsDown,
    LogsPageUp,
    LogsPageDown,
    LogsToTop,
    LogsToBottom,

    /// Clear the status-line notice
    DismissNotice,
}
