//! Notification channel handlers

use pricewatch_core::{Error, NotificationSettings, TestMessage};
use tracing::warn;

use crate::notice::Notice;
use crate::state::{AppState, UiMode};
use crate::tabs::Tab;

use super::{ChannelFetch, UpdateAction, UpdateResult};

pub const SAVED_NOTICE: &str = "Notification settings saved.";
pub const TEST_SENT_NOTICE: &str = "Test message sent (if the credentials are correct).";

pub fn handle_load(state: &mut AppState) -> UpdateResult {
    state.channel_form.loading = true;
    UpdateResult::action(UpdateAction::FetchChannel {
        purpose: ChannelFetch::Populate,
    })
}

pub fn handle_loaded(state: &mut AppState, settings: NotificationSettings) -> UpdateResult {
    state.channel_form.apply_loaded(&settings);
    UpdateResult::none()
}

pub fn handle_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.channel_form.loading = false;
    state.show_notice(Notice::error(format!(
        "Could not load notification settings: {}",
        error
    )));
    UpdateResult::none()
}

pub fn handle_edit(state: &mut AppState) -> UpdateResult {
    state.select_tab(Tab::Notifications);
    state.ui_mode = UiMode::ChannelForm;
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, text: String) -> UpdateResult {
    state.channel_form.set_focused(text);
    UpdateResult::none()
}

pub fn handle_switch_field(state: &mut AppState) -> UpdateResult {
    state.channel_form.focus_other();
    UpdateResult::none()
}

pub fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::ChannelForm {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

/// Save the fields exactly as typed
pub fn handle_save(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::ChannelForm {
        state.ui_mode = UiMode::Normal;
    }
    state.channel_form.saving = true;
    UpdateResult::action(UpdateAction::SaveChannel {
        update: state.channel_form.update(),
    })
}

pub fn handle_saved(state: &mut AppState) -> UpdateResult {
    state.channel_form.saving = false;
    state.show_notice(Notice::info(SAVED_NOTICE));
    UpdateResult::none()
}

pub fn handle_save_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.channel_form.saving = false;
    state.show_notice(Notice::error(format!(
        "Could not save notification settings: {}",
        error
    )));
    UpdateResult::none()
}

/// Test send starts by re-reading the stored credentials
pub fn handle_send_test(state: &mut AppState) -> UpdateResult {
    state.channel_form.testing = true;
    UpdateResult::action(UpdateAction::FetchChannel {
        purpose: ChannelFetch::TestPrecheck,
    })
}

pub fn handle_precheck_loaded(state: &mut AppState, settings: NotificationSettings) -> UpdateResult {
    if settings.is_complete() {
        return UpdateResult::action(UpdateAction::SendTestMessage {
            message: TestMessage::default(),
        });
    }

    warn!("Test message aborted: credentials incomplete");
    state.channel_form.testing = false;
    state.show_notice(Notice::from_error(&Error::MissingCredentials));
    UpdateResult::none()
}

pub fn handle_test_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.channel_form.testing = false;
    state.show_notice(Notice::error(format!(
        "Could not send test message: {}",
        error
    )));
    UpdateResult::none()
}

pub fn handle_test_sent(state: &mut AppState) -> UpdateResult {
    state.channel_form.testing = false;
    state.show_notice(Notice::info(TEST_SENT_NOTICE));
    UpdateResult::none()
}
