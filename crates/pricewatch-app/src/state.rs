//! Application state (Model in TEA pattern)

use crate::channel_form::ChannelFormState;
use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::log_feed_state::LogFeedState;
use crate::notice::Notice;
use crate::rule_form::RuleFormState;
use crate::rule_list::RuleListState;
use crate::tabs::{Tab, TabController};

/// Lifecycle of the whole application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Where key presses go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Keys navigate tabs and trigger actions
    #[default]
    Normal,

    /// Keys edit the rule form
    RuleForm,

    /// Keys edit the notification channel fields
    ChannelForm,

    /// A confirmation dialog is open
    ConfirmDialog,
}

impl UiMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, UiMode::RuleForm | UiMode::ChannelForm)
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub tabs: TabController,

    pub rule_list: RuleListState,
    pub rule_form: RuleFormState,
    pub channel_form: ChannelFormState,
    pub log_feed: LogFeedState,

    pub confirm_dialog_state: Option<ConfirmDialogState>,
    pub notice: Option<Notice>,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            tabs: TabController::new(settings.ui.default_tab),
            rule_list: RuleListState::new(),
            rule_form: RuleFormState::new(),
            channel_form: ChannelFormState::new(),
            log_feed: LogFeedState::new(),
            confirm_dialog_state: None,
            notice: None,
            settings,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    /// Switch tabs, leaving any edit mode behind
    pub fn select_tab(&mut self, tab: Tab) {
        if self.tabs.activate(tab) && self.ui_mode.is_editing() {
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Drop the notice once it outlived the configured timeout
    pub fn expire_notice(&mut self) {
        let timeout = self.settings.ui.notice_timeout();
        if self.notice.as_ref().is_some_and(|n| n.is_expired(timeout)) {
            self.notice = None;
        }
    }

    pub fn open_confirm_dialog(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog_state = Some(dialog);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    pub fn close_confirm_dialog(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    #[test]
    fn test_initial_tab_from_settings() {
        let mut settings = Settings::default();
        settings.ui.default_tab = Tab::Logs;
        let state = AppState::with_settings(settings);
        assert_eq!(state.active_tab(), Tab::Logs);
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_select_tab_leaves_edit_mode() {
        let mut state = AppState::new();
        state.ui_mode = UiMode::RuleForm;
        state.select_tab(Tab::Notifications);
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert_eq!(state.active_tab(), Tab::Notifications);
    }

    #[test]
    fn test_expire_notice() {
        let mut state = AppState::new();
        state.settings.ui.notice_timeout_ms = 0;
        state.show_notice(Notice::info("done"));
        state.expire_notice();
        assert!(state.notice.is_none());

        state.settings.ui.notice_timeout_ms = 60_000;
        state.show_notice(Notice::error("boom"));
        state.expire_notice();
        assert_eq!(state.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));
    }

    #[test]
    fn test_should_quit() {
        let mut state = AppState::new();
        assert!(!state.should_quit());
        state.force_quit();
        assert!(state.should_quit());
    }
}
