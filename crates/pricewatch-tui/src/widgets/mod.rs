//! Custom widget components

mod channel_panel;
mod confirm_dialog;
mod log_panel;
pub mod modal_overlay;
mod rule_cards;
mod rule_form;
mod status_bar;
mod tab_bar;
mod text_field;

pub use channel_panel::ChannelPanel;
pub use confirm_dialog::ConfirmDialog;
pub use log_panel::{LogPanel, EMPTY_FEED};
pub use rule_cards::RuleCards;
pub use rule_form::RuleFormPanel;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use text_field::TextField;
