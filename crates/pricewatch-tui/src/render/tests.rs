//! Full-screen render tests

use super::view;
use crate::test_utils::{state_with_rules, test_rule, TestTerminal};
use pricewatch_app::confirm_dialog::ConfirmDialogState;
use pricewatch_app::notice::Notice;
use pricewatch_app::rule_form::RulePrefill;
use pricewatch_app::rule_list::EMPTY_PLACEHOLDER;
use pricewatch_app::state::{AppState, UiMode};
use pricewatch_app::tabs::Tab;
use pricewatch_core::{LogFeed, NotificationSettings};

fn render_screen(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_initial_screen_shows_placeholder_and_tabs() {
    let mut state = AppState::new();
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("pricewatch"));
    assert!(term.buffer_contains("Notifications"));
    assert!(term.buffer_contains(EMPTY_PLACEHOLDER));
    assert!(term.buffer_contains("New rule"));
}

#[test]
fn test_rules_tab_shows_cards_and_form() {
    let mut state = state_with_rules([test_rule("AAPL", true), test_rule("MSFT", false)]);
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("AAPL"));
    assert!(term.buffer_contains("MSFT"));
    assert!(term.buffer_contains("Ticker*:"));
    assert!(term.buffer_contains("[space] Deactivate"));
}

#[test]
fn test_prefilled_form_titled_as_edit() {
    let mut state = state_with_rules([test_rule("AAPL", true)]);
    if let Some(rule) = state.rule_list.rules().and_then(|r| r.get("AAPL")).cloned() {
        state.rule_form.prefill(&RulePrefill::from_rule(&rule));
    }
    state.ui_mode = UiMode::RuleForm;
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Edit rule"));
    assert!(term.buffer_contains("AAPL▏"));
}

#[test]
fn test_only_active_tab_content_is_drawn() {
    let mut state = state_with_rules([test_rule("AAPL", true)]);
    state.channel_form.apply_loaded(&NotificationSettings::new("secret-token", "-1001"));
    state.select_tab(Tab::Notifications);
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("-1001"));
    assert!(term.buffer_contains("oken"));
    assert!(!term.buffer_contains("secret-token"));
    assert!(!term.buffer_contains("AAPL"));
}

#[test]
fn test_logs_tab_reports_viewport_height() {
    let mut state = AppState::new();
    state
        .log_feed
        .replace(LogFeed::new((0..100).map(|i| format!("line {}", i)).collect()));
    state.select_tab(Tab::Logs);
    let term = render_screen(&mut state);

    // 30 rows - header(3) - status(1) - borders(2)
    assert_eq!(state.log_feed.visible_lines, 24);
    assert!(term.buffer_contains("line 0"));
    assert!(!term.buffer_contains("line 24"));
}

#[test]
fn test_notice_in_status_bar() {
    let mut state = AppState::new();
    state.show_notice(Notice::info("Saved rule AAPL"));
    let term = render_screen(&mut state);

    let last = term.find_line("Saved rule AAPL").expect("notice rendered");
    assert_eq!(last, 29);
}

#[test]
fn test_confirm_dialog_overlays_view() {
    let mut state = state_with_rules([test_rule("AAPL", true)]);
    state.open_confirm_dialog(ConfirmDialogState::delete_rule("AAPL"));
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Delete rule?"));
    assert!(term.buffer_contains("[y] Delete"));
    assert!(term.buffer_contains("y confirm"));
}

#[test]
fn test_compact_terminal_stacks_form_below_cards() {
    let mut state = state_with_rules([test_rule("AAPL", true)]);
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &mut state));

    let cards = term.find_line("AAPL").expect("card");
    let form = term.find_line("New rule").expect("form");
    assert!(form > cards);
}
