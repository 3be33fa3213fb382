//! Labelled single-line text field

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

const CURSOR: &str = "▏";

/// One `label: value` row; the focused field shows a cursor while editing
pub struct TextField<'a> {
    label: &'a str,
    value: &'a str,
    label_width: u16,
    required: bool,
    focused: bool,
    editing: bool,
    placeholder: Option<&'a str>,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            label_width: label.width() as u16 + 2,
            required: false,
            focused: false,
            editing: false,
            placeholder: None,
        }
    }

    /// Pad labels so values line up across rows
    pub fn label_width(mut self, width: u16) -> Self {
        self.label_width = width;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    /// Muted text shown when the value is empty
    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Tail of `value` that fits in `width` columns, leaving room for the cursor
    fn visible_value(&self, width: usize) -> &'a str {
        let mut start = 0;
        while start < self.value.len() && self.value[start..].width() >= width {
            start += self.value[start..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
        }
        &self.value[start..]
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let marker = if self.required { "*" } else { "" };
        let label = format!("{}{}:", self.label, marker);
        let label_style = if self.focused && self.editing {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let label_span = Span::styled(
            format!("{:<width$}", label, width = self.label_width as usize),
            label_style,
        );

        let value_width = area.width.saturating_sub(self.label_width) as usize;
        let field_style = styles::field(self.focused && self.editing);
        let mut spans = vec![label_span];
        if self.value.is_empty() && !(self.focused && self.editing) {
            let text = self.placeholder.unwrap_or("");
            spans.push(Span::styled(text, styles::text_muted()));
        } else {
            spans.push(Span::styled(self.visible_value(value_width), field_style));
            if self.focused && self.editing {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_required_marker_and_value() {
        let mut term = TestTerminal::new();
        let field = TextField::new("Ticker", "AAPL").required(true);
        term.render_widget(field, Rect::new(0, 0, 40, 1));
        assert!(term.line_contains(0, "Ticker*:"));
        assert!(term.line_contains(0, "AAPL"));
    }

    #[test]
    fn test_cursor_only_while_editing() {
        let mut term = TestTerminal::new();
        let field = TextField::new("Up price", "160").focused(true);
        term.render_widget(field, Rect::new(0, 0, 40, 1));
        assert!(!term.buffer_contains(CURSOR));

        let field = TextField::new("Up price", "160").focused(true).editing(true);
        term.render_widget(field, Rect::new(0, 0, 40, 1));
        assert!(term.line_contains(0, "160▏"));
    }

    #[test]
    fn test_placeholder_for_empty_value() {
        let mut term = TestTerminal::new();
        let field = TextField::new("Up note", "").placeholder("optional");
        term.render_widget(field, Rect::new(0, 0, 40, 1));
        assert!(term.line_contains(0, "optional"));
    }

    #[test]
    fn test_long_value_keeps_its_tail() {
        let field = TextField::new("Token", "abcdefghij");
        assert_eq!(field.visible_value(5), "ghij");
        assert_eq!(field.visible_value(20), "abcdefghij");
    }
}
