//! Semantic style builders
//!
//! Widgets ask for a role ("muted text", "active border") rather than a color,
//! so the palette can change in one place.

use pricewatch_app::notice::NoticeLevel;
use pricewatch_app::rule_list::Badge;
use pricewatch_core::LogTone;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

fn fg(color: Color) -> Style {
    Style::new().fg(color)
}

fn bold(color: Color) -> Style {
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}

pub fn text_primary() -> Style {
    fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    fg(palette::TEXT_MUTED)
}

pub fn border_inactive() -> Style {
    fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    fg(palette::BORDER_ACTIVE)
}

pub fn accent() -> Style {
    fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    bold(palette::ACCENT)
}

pub fn keybinding() -> Style {
    fg(palette::STATUS_YELLOW)
}

/// Highlighted row: dark text on the accent color
pub fn focused_selected() -> Style {
    bold(palette::CONTRAST_FG).bg(palette::ACCENT)
}

/// Input box colors; the focused field gets the lighter background
pub fn field(focused: bool) -> Style {
    match focused {
        true => fg(palette::TEXT_PRIMARY).bg(palette::FIELD_FOCUSED_BG),
        false => fg(palette::TEXT_SECONDARY).bg(palette::FIELD_BG),
    }
}

/// Rounded panel whose border lights up when the panel has focus
pub fn glass_block(focused: bool) -> Block<'static> {
    let border = if focused {
        border_active()
    } else {
        border_inactive()
    };
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border)
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .title(title)
        .style(Style::new().bg(palette::POPUP_BG))
}

pub fn badge(badge: Badge) -> Style {
    match badge {
        Badge::Active => bold(palette::STATUS_GREEN),
        Badge::Inactive => bold(palette::TEXT_MUTED),
    }
}

/// Icon and style for a status-line notice
pub fn notice(level: NoticeLevel) -> (&'static str, Style) {
    match level {
        NoticeLevel::Info => ("●", fg(palette::STATUS_GREEN)),
        NoticeLevel::Warning => ("▲", fg(palette::STATUS_YELLOW)),
        NoticeLevel::Error => ("✗", bold(palette::STATUS_RED)),
    }
}

/// Body style for a log line of the given tone
pub fn log_tone(tone: LogTone) -> Style {
    match tone {
        LogTone::AlertUp => fg(palette::LOG_ALERT_UP),
        LogTone::AlertDown => fg(palette::LOG_ALERT_DOWN),
        LogTone::Failure => bold(palette::LOG_FAILURE),
        LogTone::Plain => fg(palette::LOG_PLAIN),
    }
}

pub fn log_stamp() -> Style {
    fg(palette::LOG_STAMP)
}
