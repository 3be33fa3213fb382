//! Header with the app title and the tab bar

use pricewatch_app::tabs::{Tab, TabController};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

const TITLE: &str = " pricewatch ";

/// Header: rounded border, tabs on the left and the backend URL on the right
pub struct TabBar<'a> {
    tabs: &'a TabController,
    server: Option<&'a str>,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: &'a TabController) -> Self {
        Self { tabs, server: None }
    }

    pub fn server(mut self, server: &'a str) -> Self {
        self.server = Some(server);
        self
    }

    fn titles() -> Vec<Line<'static>> {
        Tab::ALL
            .iter()
            .map(|tab| {
                Line::from(vec![
                    Span::styled(format!(" {}", tab.shortcut()), styles::keybinding()),
                    Span::raw(format!(" {} ", tab.label())),
                ])
            })
            .collect()
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(TITLE, styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let mut tabs_area = inner;
        if let Some(server) = self.server {
            let width = server.width() as u16 + 1;
            // Only show the URL when it leaves room for the tabs
            if inner.width > width + 40 {
                let server_area = Rect {
                    x: inner.x + inner.width - width,
                    y: inner.y,
                    width,
                    height: 1,
                };
                Paragraph::new(Span::styled(server, styles::text_muted())).render(server_area, buf);
                tabs_area.width -= width;
            }
        }

        Tabs::new(Self::titles())
            .select(self.tabs.active().index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(tabs_area, buf);
    }
}
