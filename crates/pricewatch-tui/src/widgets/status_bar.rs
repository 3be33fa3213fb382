//! Status bar: the current notice, or key hints for the active mode

use pricewatch_app::notice::Notice;
use pricewatch_app::state::UiMode;
use pricewatch_app::tabs::Tab;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    notice: Option<&'a Notice>,
    mode: UiMode,
    tab: Tab,
}

impl<'a> StatusBar<'a> {
    pub fn new(notice: Option<&'a Notice>, mode: UiMode, tab: Tab) -> Self {
        Self { notice, mode, tab }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match (self.mode, self.tab) {
            (UiMode::ConfirmDialog, _) => &[("y", "confirm"), ("n", "cancel")],
            (UiMode::RuleForm, _) | (UiMode::ChannelForm, _) => {
                &[("Enter", "save"), ("Tab", "next field"), ("Esc", "cancel")]
            }
            (UiMode::Normal, Tab::Rules) => &[
                ("↑↓", "select"),
                ("space", "toggle"),
                ("e", "edit"),
                ("d", "delete"),
                ("n", "new"),
                ("r", "reload"),
                ("q", "quit"),
            ],
            (UiMode::Normal, Tab::Notifications) => &[
                ("e", "edit"),
                ("s", "save"),
                ("t", "test"),
                ("r", "reload"),
                ("q", "quit"),
            ],
            (UiMode::Normal, Tab::Logs) => &[
                ("↑↓", "scroll"),
                ("PgUp/PgDn", "page"),
                ("g/G", "top/bottom"),
                ("r", "refresh"),
                ("q", "quit"),
            ],
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
        }
        Line::from(spans)
    }

    fn notice_line(notice: &Notice) -> Line<'_> {
        let (icon, style) = styles::notice(notice.level);
        Line::from(vec![
            Span::raw(" "),
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(notice.text.as_str(), style),
        ])
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.notice {
            Some(notice) => Self::notice_line(notice),
            None => self.hint_line(),
        };
        Paragraph::new(line).render(area, buf);
    }
}
