//! Log feed handlers

use pricewatch_core::LogFeed;

use crate::notice::Notice;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_load(state: &mut AppState) -> UpdateResult {
    state.log_feed.loading = true;
    UpdateResult::action(UpdateAction::FetchLogs)
}

pub fn handle_loaded(state: &mut AppState, feed: LogFeed) -> UpdateResult {
    state.log_feed.replace(feed);
    UpdateResult::none()
}

pub fn handle_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.log_feed.loading = false;
    state.show_notice(Notice::error(format!("Could not load logs: {}", error)));
    UpdateResult::none()
}

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.log_feed.scroll_up(1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.log_feed.scroll_down(1);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.log_feed.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.log_feed.page_down();
    UpdateResult::none()
}

pub fn handle_to_top(state: &mut AppState) -> UpdateResult {
    state.log_feed.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_to_bottom(state: &mut AppState) -> UpdateResult {
    state.log_feed.scroll_to_bottom();
    UpdateResult::none()
}
