//! Screen layout for the control panel
//!
//! A fixed header (title plus tab bar), the active view, and a one-line
//! status bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + tab row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Status bar height
pub const STATUS_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Active tab's view
    pub body: Rect,
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the rules view into the card list and the form beside it.
///
/// Narrow terminals stack the form under the cards.
pub fn split_rules(body: Rect) -> (Rect, Rect) {
    let chunks = if body.width >= 90 {
        Layout::horizontal([Constraint::Percentage(58), Constraint::Percentage(42)]).split(body)
    } else {
        Layout::vertical([Constraint::Min(4), Constraint::Length(10)]).split(body)
    };
    (chunks[0], chunks[1])
}
