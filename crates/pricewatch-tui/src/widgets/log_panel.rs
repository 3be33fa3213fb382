//! Backend activity log panel
//!
//! Draws the newline-joined feed in server order starting at the scroll
//! offset, one row per text line. The stamp prefix is dimmed and the body is
//! colored by what the line reports.

use pricewatch_app::log_feed_state::LogFeedState;
use pricewatch_core::LogLine;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::theme::styles;

pub const EMPTY_FEED: &str = "No log entries yet. Press r to refresh.";

pub struct LogPanel {
    focused: bool,
}

impl LogPanel {
    pub fn new() -> Self {
        Self { focused: true }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn styled_line(raw: &str) -> Line<'_> {
        let line = LogLine::parse(raw);
        let body = Span::styled(line.body, styles::log_tone(line.tone()));
        match line.stamp {
            Some(stamp) => Line::from(vec![
                Span::styled(format!("[{}] ", stamp), styles::log_stamp()),
                body,
            ]),
            None => Line::from(body),
        }
    }

    fn title(state: &LogFeedState) -> String {
        if state.loading {
            return " Logs (loading…) ".to_string();
        }
        let Some(at) = state.last_loaded else {
            return " Logs ".to_string();
        };
        match state.feed().latest_stamp() {
            Some(latest) => format!(
                " Logs · {} lines · latest {} · loaded {} ",
                state.total_lines(),
                latest.format("%Y-%m-%d %H:%M"),
                at.format("%H:%M:%S")
            ),
            None => format!(
                " Logs · {} lines · loaded {} ",
                state.total_lines(),
                at.format("%H:%M:%S")
            ),
        }
    }

    /// `first-last/total` position shown in the bottom border
    fn position(state: &LogFeedState) -> Option<String> {
        let total = state.total_lines();
        if total == 0 {
            return None;
        }
        let last = (state.offset + state.visible_lines).min(total);
        Some(format!(" {}-{}/{} ", state.offset + 1, last, total))
    }
}

impl Default for LogPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for LogPanel {
    type State = LogFeedState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = styles::glass_block(self.focused).title(Self::title(state));
        let inner = block.inner(area);

        // Record the viewport so paging uses the real height
        state.set_visible_lines(inner.height as usize);

        let block = match Self::position(state) {
            Some(pos) => block.title_bottom(Line::from(Span::styled(pos, styles::text_muted())).right_aligned()),
            None => block,
        };
        block.render(area, buf);

        if state.total_lines() == 0 {
            Paragraph::new(Span::styled(EMPTY_FEED, styles::text_muted())).render(inner, buf);
            return;
        }

        let lines: Vec<Line<'_>> = state
            .rows()
            .skip(state.offset)
            .take(inner.height as usize)
            .map(Self::styled_line)
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;
    use pricewatch_core::LogFeed;

    fn state_with(lines: &[&str]) -> LogFeedState {
        let mut state = LogFeedState::new();
        state.replace(LogFeed::new(lines.iter().map(|l| l.to_string()).collect()));
        state
    }

    fn render(state: &mut LogFeedState, height: u16) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.terminal
            .draw(|frame| {
                frame.render_stateful_widget(LogPanel::new(), Rect::new(0, 0, 80, height), state)
            })
            .expect("draw");
        term
    }

    #[test]
    fn test_lines_in_server_order() {
        let mut state = state_with(&["[2024-05-01 10:05] second", "[2024-05-01 10:00] first"]);
        let term = render(&mut state, 6);

        let second = term.find_line("second").expect("second line");
        let first = term.find_line("first").expect("first line");
        assert!(second < first);
    }

    #[test]
    fn test_multiline_entry_keeps_its_line_break() {
        let mut state = state_with(&[
            "[2024-03-01 13:00] 📈 AAPL rompió el techo\nPrecio base: 150.00 (+13.33%)",
            "b",
        ]);
        let term = render(&mut state, 8);

        let alert = term.find_line("rompió").expect("alert row");
        let detail = term.find_line("Precio base").expect("detail row");
        assert_eq!(detail, alert + 1);
        assert!(term.buffer_contains("1-3/3"));
    }

    #[test]
    fn test_title_shows_latest_entry_time() {
        let mut state = state_with(&["[2024-05-01 10:05] second", "[2024-05-01 10:00] first"]);
        let term = render(&mut state, 6);
        assert!(term.line_contains(0, "latest 2024-05-01 10:05"));
    }

    #[test]
    fn test_empty_feed_placeholder() {
        let mut state = LogFeedState::new();
        let term = render(&mut state, 6);
        assert!(term.buffer_contains(EMPTY_FEED));
    }

    #[test]
    fn test_render_records_visible_lines_and_scrolls() {
        let lines: Vec<String> = (0..20).map(|i| format!("entry {:02}", i)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut state = state_with(&refs);

        render(&mut state, 7);
        assert_eq!(state.visible_lines, 5);

        state.scroll_to_bottom();
        let term = render(&mut state, 7);
        assert!(term.buffer_contains("entry 19"));
        assert!(!term.buffer_contains("entry 14"));
        assert!(term.buffer_contains("16-20/20"));
    }

    #[test]
    fn test_failure_lines_are_red() {
        let mut state = state_with(&["[2024-05-01 10:00] Error fetching AAPL"]);
        let term = render(&mut state, 4);
        let y = term.find_line("Error fetching").expect("line");
        let x = (0..80)
            .find(|x| term.buffer()[(*x, y)].symbol() == "E")
            .expect("E cell");
        assert_eq!(term.buffer()[(x, y)].fg, palette::LOG_FAILURE);
        assert_eq!(term.buffer()[(2, y)].fg, palette::LOG_STAMP);
    }
}
