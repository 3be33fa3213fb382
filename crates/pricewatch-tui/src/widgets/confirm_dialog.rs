//! Confirmation dialog widget

use pricewatch_app::confirm_dialog::ConfirmDialogState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use super::modal_overlay::{centered_rect, dim_background};
use crate::theme::{palette, styles};

const MODAL_WIDTH: u16 = 50;
const MODAL_HEIGHT: u16 = 8;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    /// `[y] Delete  [n] Cancel`
    fn buttons(&self) -> Line<'a> {
        let key = |k: &'static str, color| {
            [
                Span::styled("[", styles::text_muted()),
                Span::styled(k, Style::new().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled("] ", styles::text_muted()),
            ]
        };
        let mut spans = Vec::with_capacity(9);
        spans.extend(key("y", palette::STATUS_RED));
        spans.push(Span::styled(
            self.state.confirm.label.as_str(),
            styles::text_primary(),
        ));
        spans.push(Span::raw("  "));
        spans.extend(key("n", palette::STATUS_GREEN));
        spans.push(Span::styled(
            self.state.cancel.label.as_str(),
            styles::text_primary(),
        ));
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal_area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.prompt.as_str())
            .alignment(Alignment::Center)
            .style(styles::keybinding())
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}
