//! Shared helpers for modal dialogs

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;

use crate::theme::palette;

/// `width` x `height` rect in the middle of `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// Mute whatever is drawn in `area` so the modal on top stands out
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let muted = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    for position in area.positions() {
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_style(muted);
        }
    }
}
