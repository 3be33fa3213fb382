//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::actions::handle_action;
use crate::backend::AlertBackend;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Feed `message` through [`handler::update`], then any follow-up it returns,
/// spawning each requested action on the way
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    backend: &Arc<B>,
    msg_tx: &mpsc::Sender<Message>,
    shutdown_rx: &watch::Receiver<bool>,
) where
    B: AlertBackend + Sync + 'static,
{
    let mut next = message;
    loop {
        let handler::UpdateResult { message, action } = handler::update(state, next);
        if let Some(action) = action {
            handle_action(action, backend.clone(), msg_tx.clone(), shutdown_rx.clone());
        }
        match message {
            Some(follow_up) => next = follow_up,
            None => break,
        }
    }
}
