//! Render helpers for widget and screen tests
//!
//! Everything draws into ratatui's `TestBackend`; assertions read the buffer
//! back as plain text rows.

use pricewatch_app::AppState;
use pricewatch_core::{Rule, RuleSet};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Wide enough for the side-by-side rules layout
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 30;

/// Narrow enough to force the stacked rules layout
pub const COMPACT_WIDTH: u16 = 60;
pub const COMPACT_HEIGHT: u16 = 24;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with(&mut self, draw: impl FnOnce(&mut Frame)) {
        self.terminal.draw(draw).expect("draw into TestBackend");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Each buffer row as a string
    pub fn rows(&self) -> Vec<String> {
        let buf = self.buffer();
        (0..buf.area.height).map(|y| row_text(buf, y)).collect()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.rows().iter().any(|row| row.contains(text))
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.rows()
            .get(usize::from(line))
            .is_some_and(|row| row.contains(text))
    }

    /// Index of the first row containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        self.rows()
            .iter()
            .position(|row| row.contains(text))
            .and_then(|y| u16::try_from(y).ok())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

pub fn test_rule(symbol: &str, active: bool) -> Rule {
    Rule {
        symbol: symbol.to_string(),
        base_price: Some(150.0),
        up: 160.0,
        down: 140.0,
        note_up: String::new(),
        note_down: String::new(),
        active,
    }
}

/// App state with the given rules already loaded
pub fn state_with_rules(rules: impl IntoIterator<Item = Rule>) -> AppState {
    let mut state = AppState::new();
    state.rule_list.replace(rules.into_iter().collect::<RuleSet>());
    state
}
