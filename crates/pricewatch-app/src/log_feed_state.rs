//! Log feed view state: the rendered text and its scroll window.
//!
//! The handler layer scrolls; the TUI layer reports the viewport height on
//! every render.

use chrono::{DateTime, Local};
use pricewatch_core::LogFeed;

/// Displayed log text plus scroll position
///
/// Entries may span several rows: the offset and counts are in displayed
/// rows of [`text`](Self::text), not feed entries.
#[derive(Debug, Clone, Default)]
pub struct LogFeedState {
    feed: LogFeed,
    text: String,
    row_count: usize,
    /// First visible line
    pub offset: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
    pub loading: bool,
    pub last_loaded: Option<DateTime<Local>>,
}

impl LogFeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed text entirely and jump back to the top
    pub fn replace(&mut self, feed: LogFeed) {
        self.text = feed.render_text();
        self.row_count = self.text.lines().count();
        self.feed = feed;
        self.offset = 0;
        self.loading = false;
        self.last_loaded = Some(Local::now());
    }

    /// Newline-joined feed exactly as displayed
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn feed(&self) -> &LogFeed {
        &self.feed
    }

    /// Rows of the joined text, one per displayed line
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn total_lines(&self) -> usize {
        self.row_count
    }

    fn max_offset(&self) -> usize {
        self.total_lines().saturating_sub(self.visible_lines.max(1))
    }

    pub fn set_visible_lines(&mut self, lines: usize) {
        self.visible_lines = lines;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn page_size(&self) -> usize {
        self.visible_lines.saturating_sub(1).max(1)
    }
}
