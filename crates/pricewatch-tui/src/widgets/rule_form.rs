//! Rule create/edit form panel

use pricewatch_app::rule_form::{RuleField, RuleFormState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::text_field::TextField;
use crate::theme::styles;

const LABEL_WIDTH: u16 = 13;

pub struct RuleFormPanel<'a> {
    form: &'a RuleFormState,
    editing: bool,
    /// The ticker in the form already has a stored rule
    replaces_existing: bool,
}

impl<'a> RuleFormPanel<'a> {
    pub fn new(form: &'a RuleFormState) -> Self {
        Self {
            form,
            editing: false,
            replaces_existing: false,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn replaces_existing(mut self, replaces: bool) -> Self {
        self.replaces_existing = replaces;
        self
    }

    fn title(&self) -> &'static str {
        if self.replaces_existing {
            " Edit rule "
        } else {
            " New rule "
        }
    }

    fn hint(&self) -> Line<'static> {
        if self.editing {
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" save  ", styles::text_muted()),
                Span::styled("Tab", styles::keybinding()),
                Span::styled(" next  ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" cancel", styles::text_muted()),
            ])
        } else {
            Line::from(vec![
                Span::styled("n", styles::keybinding()),
                Span::styled(" new  ", styles::text_muted()),
                Span::styled("e", styles::keybinding()),
                Span::styled(" edit selected", styles::text_muted()),
            ])
        }
    }
}

impl Widget for RuleFormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.editing).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        let bottom = inner.y + inner.height;
        for field in RuleField::ALL {
            if y >= bottom {
                return;
            }
            let placeholder = if field.is_required() { "" } else { "optional" };
            TextField::new(field.label(), self.form.value(field))
                .label_width(LABEL_WIDTH)
                .required(field.is_required())
                .focused(self.form.focused == field)
                .editing(self.editing)
                .placeholder(placeholder)
                .render(Rect::new(inner.x, y, inner.width, 1), buf);
            y += 1;
        }

        // Hint on the last inner row, leaving a gap after the fields
        if y < bottom.saturating_sub(1) {
            let hint_row = Rect::new(inner.x, bottom - 1, inner.width, 1);
            Paragraph::new(self.hint()).render(hint_row, buf);
        }
    }
}
