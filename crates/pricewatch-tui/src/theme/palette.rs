//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const FIELD_BG: Color = Color::Rgb(40, 44, 54);
pub const FIELD_FOCUSED_BG: Color = Color::Rgb(60, 64, 80);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Log tones ---
pub const LOG_STAMP: Color = Color::DarkGray;
pub const LOG_ALERT_UP: Color = Color::Green;
pub const LOG_ALERT_DOWN: Color = Color::LightRed;
pub const LOG_FAILURE: Color = Color::Red;
pub const LOG_PLAIN: Color = Color::White;
