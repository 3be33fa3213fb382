//! Rule list and rule form handlers
//!
//! Every mutation follows the same pipeline: request action, then
//! `RuleMutationApplied`, then `LoadRules`, then `RulesLoaded` re-renders.

use pricewatch_core::RuleSet;
use tracing::{debug, warn};

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::{Message, RuleChange};
use crate::notice::Notice;
use crate::rule_form::{RuleField, RulePrefill};
use crate::rule_list::CardAction;
use crate::state::{AppState, UiMode};
use crate::tabs::Tab;

use super::{UpdateAction, UpdateResult};

pub fn handle_load_rules(state: &mut AppState) -> UpdateResult {
    state.rule_list.loading = true;
    UpdateResult::action(UpdateAction::FetchRules)
}

pub fn handle_rules_loaded(state: &mut AppState, rules: RuleSet) -> UpdateResult {
    debug!("Rendering {} rule(s)", rules.len());
    state.rule_list.replace(rules);
    UpdateResult::none()
}

pub fn handle_rules_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.rule_list.loading = false;
    state.show_notice(Notice::error(format!("Could not load rules: {}", error)));
    UpdateResult::none()
}

/// Emit the selected card's binding for `action`, if a card is selected
pub fn handle_card_action(state: &mut AppState, action: CardAction) -> UpdateResult {
    match state.rule_list.selected_binding(action) {
        Some(msg) => UpdateResult::message(msg),
        None => UpdateResult::none(),
    }
}

pub fn handle_toggle_rule(symbol: String, active: bool) -> UpdateResult {
    UpdateResult::action(UpdateAction::SetRuleActive { symbol, active })
}

pub fn handle_request_delete(state: &mut AppState, symbol: String) -> UpdateResult {
    state.open_confirm_dialog(ConfirmDialogState::delete_rule(&symbol));
    UpdateResult::none()
}

pub fn handle_confirm_delete(state: &mut AppState, symbol: String) -> UpdateResult {
    state.close_confirm_dialog();
    UpdateResult::action(UpdateAction::DeleteRule { symbol })
}

pub fn handle_cancel_delete(state: &mut AppState) -> UpdateResult {
    state.close_confirm_dialog();
    UpdateResult::none()
}

pub fn handle_mutation_applied(state: &mut AppState, change: RuleChange) -> UpdateResult {
    if let RuleChange::Upserted { symbol } = &change {
        state.rule_form.clear();
        if state.ui_mode == UiMode::RuleForm {
            state.ui_mode = UiMode::Normal;
        }
        state.rule_list.select_symbol(symbol);
    }
    state.show_notice(Notice::info(change.describe()));
    UpdateResult::message(Message::LoadRules)
}

pub fn handle_mutation_failed(state: &mut AppState, change: RuleChange, error: String) -> UpdateResult {
    warn!("Rule change for {} failed: {}", change.symbol(), error);
    state.show_notice(Notice::error(format!(
        "Could not update {}: {}",
        change.symbol(),
        error
    )));
    UpdateResult::none()
}

pub fn handle_prefill(state: &mut AppState, prefill: RulePrefill) -> UpdateResult {
    state.select_tab(Tab::Rules);
    state.rule_form.prefill(&prefill);
    state.rule_list.select_symbol(&prefill.symbol);
    state.ui_mode = UiMode::RuleForm;
    UpdateResult::none()
}

/// Open the form for a new rule; values left from an abandoned Edit are dropped,
/// a half-typed new rule is kept
pub fn handle_start_new_rule(state: &mut AppState) -> UpdateResult {
    state.select_tab(Tab::Rules);
    if state.rule_form.from_prefill {
        state.rule_form.clear();
    }
    state.rule_form.focused = RuleField::Symbol;
    state.ui_mode = UiMode::RuleForm;
    UpdateResult::none()
}

pub fn handle_form_input(state: &mut AppState, text: String) -> UpdateResult {
    state.rule_form.set_focused(text);
    UpdateResult::none()
}

pub fn handle_form_cancel(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::RuleForm {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

/// Validate locally; only a valid form produces a request
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.rule_form.validate() {
        Ok(draft) => UpdateResult::action(UpdateAction::UpsertRule { draft }),
        Err(e) => {
            debug!("Rule form rejected: {}", e);
            state.show_notice(Notice::from_error(&e));
            UpdateResult::none()
        }
    }
}
