//! Rule cards: one card per stored rule, or the empty placeholder

use pricewatch_app::rule_list::{CardAction, RuleCard, RuleListView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Key that triggers a card action on the selected card
fn action_key(action: CardAction) -> &'static str {
    match action {
        CardAction::Toggle => "space",
        CardAction::Edit => "e",
        CardAction::Delete => "d",
    }
}

pub struct RuleCards<'a> {
    view: &'a RuleListView,
    selected: usize,
    focused: bool,
    loading: bool,
}

impl<'a> RuleCards<'a> {
    pub fn new(view: &'a RuleListView) -> Self {
        Self {
            view,
            selected: 0,
            focused: true,
            loading: false,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn card_lines(card: &RuleCard, selected: bool) -> Vec<Line<'static>> {
        let marker = if selected { "▶ " } else { "  " };
        let mut symbol_style = styles::text_primary().add_modifier(Modifier::BOLD);
        if selected {
            symbol_style = symbol_style.patch(styles::accent());
        }

        let mut lines = vec![Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::styled(card.symbol.clone(), symbol_style),
            Span::raw("  "),
            Span::styled(card.badge.label(), styles::badge(card.badge)),
        ])];

        let mut prices = vec![
            Span::raw("    "),
            Span::styled("base ", styles::text_muted()),
            Span::styled(card.base_price.clone(), styles::text_secondary()),
            Span::styled("  up ", styles::text_muted()),
            Span::styled(card.up.clone(), styles::text_secondary()),
        ];
        if let Some(change) = &card.up_change {
            prices.push(Span::styled(format!(" ({})", change), styles::text_muted()));
        }
        prices.push(Span::styled("  down ", styles::text_muted()));
        prices.push(Span::styled(card.down.clone(), styles::text_secondary()));
        if let Some(change) = &card.down_change {
            prices.push(Span::styled(format!(" ({})", change), styles::text_muted()));
        }
        lines.push(Line::from(prices));

        if let Some(note) = &card.note_up {
            lines.extend(note_rows("↑", note));
        }
        if let Some(note) = &card.note_down {
            lines.extend(note_rows("↓", note));
        }

        if selected {
            let mut actions = vec![Span::raw("    ")];
            for binding in &card.bindings {
                actions.push(Span::styled(
                    format!("[{}]", action_key(binding.action)),
                    styles::keybinding(),
                ));
                actions.push(Span::styled(
                    format!(" {}  ", binding.label),
                    styles::text_muted(),
                ));
            }
            lines.push(Line::from(actions));
        }

        lines.push(Line::raw(""));
        lines
    }

    /// Index of the first card to draw so the selected card stays in view
    fn first_visible(heights: &[usize], selected: usize, available: usize) -> usize {
        let selected = selected.min(heights.len().saturating_sub(1));
        let mut first = selected;
        let mut used = heights.get(selected).copied().unwrap_or(0);
        while first > 0 && used + heights[first - 1] <= available {
            first -= 1;
            used += heights[first];
        }
        first
    }
}

/// One row per line of a note; continuation rows line up under the text
fn note_rows(arrow: &'static str, note: &str) -> Vec<Line<'static>> {
    note.lines()
        .enumerate()
        .map(|(i, text)| {
            let lead = if i == 0 { arrow } else { " " };
            Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("{} {}", lead, text), styles::text_secondary()),
            ])
        })
        .collect()
}

impl Widget for RuleCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.loading { " Rules (loading…) " } else { " Rules " };
        let block = styles::glass_block(self.focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let cards = match self.view {
            RuleListView::Placeholder(text) => {
                Paragraph::new(Span::styled(*text, styles::text_muted()))
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
                return;
            }
            RuleListView::Cards(cards) => cards,
        };

        let rendered: Vec<Vec<Line<'static>>> = cards
            .iter()
            .enumerate()
            .map(|(i, card)| Self::card_lines(card, i == self.selected))
            .collect();
        let heights: Vec<usize> = rendered.iter().map(Vec::len).collect();
        let first = Self::first_visible(&heights, self.selected, inner.height as usize);

        let lines: Vec<Line<'static>> = rendered.into_iter().skip(first).flatten().collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
