//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::rule_list::CardAction;
use crate::state::AppState;

use super::{channel, keys::handle_key, logs, rules, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.expire_notice();
            UpdateResult::none()
        }

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tabs
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            state.select_tab(tab);
            UpdateResult::none()
        }
        Message::NextTab => {
            state.tabs.next();
            UpdateResult::none()
        }
        Message::PreviousTab => {
            state.tabs.previous();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Rule List
        // ─────────────────────────────────────────────────────────
        Message::LoadRules => rules::handle_load_rules(state),
        Message::RulesLoaded { rules } => rules::handle_rules_loaded(state, rules),
        Message::RulesLoadFailed { error } => rules::handle_rules_load_failed(state, error),

        Message::SelectNextRule => {
            state.rule_list.select_next();
            UpdateResult::none()
        }
        Message::SelectPreviousRule => {
            state.rule_list.select_previous();
            UpdateResult::none()
        }

        Message::ToggleSelectedRule => rules::handle_card_action(state, CardAction::Toggle),
        Message::EditSelectedRule => rules::handle_card_action(state, CardAction::Edit),
        Message::DeleteSelectedRule => rules::handle_card_action(state, CardAction::Delete),

        Message::ToggleRule { symbol, active } => rules::handle_toggle_rule(symbol, active),
        Message::RequestDelete { symbol } => rules::handle_request_delete(state, symbol),
        Message::ConfirmDelete { symbol } => rules::handle_confirm_delete(state, symbol),
        Message::CancelDelete => rules::handle_cancel_delete(state),

        Message::RuleMutationApplied { change } => rules::handle_mutation_applied(state, change),
        Message::RuleMutationFailed { change, error } => {
            rules::handle_mutation_failed(state, change, error)
        }

        // ─────────────────────────────────────────────────────────
        // Rule Form
        // ─────────────────────────────────────────────────────────
        Message::PrefillForm(prefill) => rules::handle_prefill(state, prefill),
        Message::StartNewRule => rules::handle_start_new_rule(state),
        Message::FormInput { text } => rules::handle_form_input(state, text),
        Message::FormNextField => {
            state.rule_form.focus_next();
            UpdateResult::none()
        }
        Message::FormPreviousField => {
            state.rule_form.focus_previous();
            UpdateResult::none()
        }
        Message::FormCancel => rules::handle_form_cancel(state),
        Message::SubmitRuleForm => rules::handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Notification Channel
        // ─────────────────────────────────────────────────────────
        Message::LoadChannel => channel::handle_load(state),
        Message::ChannelLoaded { settings } => channel::handle_loaded(state, settings),
        Message::ChannelLoadFailed { error } => channel::handle_load_failed(state, error),
        Message::EditChannel => channel::handle_edit(state),
        Message::ChannelInput { text } => channel::handle_input(state, text),
        Message::ChannelNextField | Message::ChannelPreviousField => {
            channel::handle_switch_field(state)
        }
        Message::ChannelCancelEdit => channel::handle_cancel_edit(state),
        Message::SaveChannel => channel::handle_save(state),
        Message::ChannelSaved => channel::handle_saved(state),
        Message::ChannelSaveFailed { error } => channel::handle_save_failed(state, error),
        Message::SendTestMessage => channel::handle_send_test(state),
        Message::TestPrecheckLoaded { settings } => channel::handle_precheck_loaded(state, settings),
        Message::TestPrecheckFailed { error } | Message::TestMessageFailed { error } => {
            channel::handle_test_failed(state, error)
        }
        Message::TestMessageSent => channel::handle_test_sent(state),

        // ─────────────────────────────────────────────────────────
        // Log Feed
        // ─────────────────────────────────────────────────────────
        Message::LoadLogs => logs::handle_load(state),
        Message::LogsLoaded { feed } => logs::handle_loaded(state, feed),
        Message::LogsLoadFailed { error } => logs::handle_load_failed(state, error),
        Message::ScrollLogsUp => logs::handle_scroll_up(state),
        Message::ScrollLogsDown => logs::handle_scroll_down(state),
        Message::LogsPageUp => logs::handle_page_up(state),
        Message::LogsPageDown => logs::handle_page_down(state),
        Message::LogsToTop => logs::handle_to_top(state),
        Message::LogsToBottom => logs::handle_to_bottom(state),
    }
}
