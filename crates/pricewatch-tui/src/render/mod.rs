//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use pricewatch_app::state::{AppState, UiMode};
use pricewatch_app::tabs::Tab;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI.
///
/// Only the log view's viewport height is written back to state.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::TabBar::new(&state.tabs).server(&state.settings.server.base_url),
        areas.header,
    );

    match state.active_tab() {
        Tab::Rules => render_rules(frame, state, areas.body),
        Tab::Notifications => {
            let panel = widgets::ChannelPanel::new(&state.channel_form)
                .editing(state.ui_mode == UiMode::ChannelForm);
            frame.render_widget(panel, areas.body);
        }
        Tab::Logs => {
            let panel = widgets::LogPanel::new().focused(state.ui_mode == UiMode::Normal);
            frame.render_stateful_widget(panel, areas.body, &mut state.log_feed);
        }
    }

    frame.render_widget(
        widgets::StatusBar::new(state.notice.as_ref(), state.ui_mode, state.active_tab()),
        areas.status,
    );

    if state.ui_mode == UiMode::ConfirmDialog {
        if let Some(dialog) = &state.confirm_dialog_state {
            frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
        }
    }
}

fn render_rules(frame: &mut Frame, state: &AppState, body: ratatui::layout::Rect) {
    let (cards_area, form_area) = layout::split_rules(body);
    let editing = state.ui_mode == UiMode::RuleForm;

    let cards = widgets::RuleCards::new(state.rule_list.view())
        .selected(state.rule_list.selected)
        .focused(!editing)
        .loading(state.rule_list.loading);
    frame.render_widget(cards, cards_area);

    let symbol = state.rule_form.symbol.trim().to_uppercase();
    let replaces_existing = !symbol.is_empty()
        && state
            .rule_list
            .rules()
            .is_some_and(|rules| rules.get(&symbol).is_some());
    let form = widgets::RuleFormPanel::new(&state.rule_form)
        .editing(editing)
        .replaces_existing(replaces_existing);
    frame.render_widget(form, form_area);
}
