//! Notification channel panel: bot token, chat id and their actions

use pricewatch_app::channel_form::{mask_token, ChannelField, ChannelFormState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::text_field::TextField;
use crate::theme::styles;

const LABEL_WIDTH: u16 = 12;

pub struct ChannelPanel<'a> {
    form: &'a ChannelFormState,
    editing: bool,
}

impl<'a> ChannelPanel<'a> {
    pub fn new(form: &'a ChannelFormState) -> Self {
        Self {
            form,
            editing: false,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    /// What the panel is waiting on, if anything
    fn activity(&self) -> Option<&'static str> {
        if self.form.loading {
            Some("Loading settings…")
        } else if self.form.saving {
            Some("Saving…")
        } else if self.form.testing {
            Some("Sending test message…")
        } else {
            None
        }
    }

    fn hint(&self) -> Line<'static> {
        let pairs: &[(&str, &str)] = if self.editing {
            &[("Enter", " save  "), ("Tab", " switch field  "), ("Esc", " cancel")]
        } else {
            &[
                ("e", " edit  "),
                ("s", " save  "),
                ("t", " send test  "),
                ("r", " reload"),
            ]
        };
        Line::from(
            pairs
                .iter()
                .flat_map(|(key, label)| {
                    [
                        Span::styled(*key, styles::keybinding()),
                        Span::styled(*label, styles::text_muted()),
                    ]
                })
                .collect::<Vec<_>>(),
        )
    }
}

impl Widget for ChannelPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.editing).title(" Notifications ");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 2 {
            return;
        }

        // Show the token in full only while it is being edited
        let token = if self.editing {
            self.form.token.clone()
        } else {
            mask_token(&self.form.token)
        };

        let rows = [
            (ChannelField::Token, token.as_str()),
            (ChannelField::ChatId, self.form.chat_id.as_str()),
        ];
        for (i, (field, value)) in rows.into_iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            TextField::new(field.label(), value)
                .label_width(LABEL_WIDTH)
                .focused(self.form.focused == field)
                .editing(self.editing)
                .placeholder("not set")
                .render(Rect::new(inner.x, inner.y + i as u16, inner.width, 1), buf);
        }

        let bottom = inner.y + inner.height;
        if let Some(activity) = self.activity() {
            if inner.height > 3 {
                let row = Rect::new(inner.x, inner.y + 3, inner.width, 1);
                Paragraph::new(Span::styled(activity, styles::accent())).render(row, buf);
            }
        }
        if inner.height > 4 {
            let row = Rect::new(inner.x, bottom - 1, inner.width, 1);
            Paragraph::new(self.hint()).render(row, buf);
        }
    }
}
