//! Engine - owns the TEA state, the message channel and the backend handle
//!
//! The TUI runner feeds key presses and ticks in and renders `engine.state`;
//! integration tests drive the same engine against an in-memory backend.

use std::sync::Arc;

use pricewatch_core::prelude::*;
use tokio::sync::{mpsc, watch};

use crate::api::HttpBackend;
use crate::backend::AlertBackend;
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel; clone it for input sources
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half; the frontend loop drains it
    pub msg_rx: mpsc::Receiver<Message>,

    /// Send `true` to abandon in-flight requests
    pub shutdown_tx: watch::Sender<bool>,
    pub shutdown_rx: watch::Receiver<bool>,

    backend: Arc<B>,
}

impl Engine<HttpBackend> {
    /// Engine talking HTTP to the backend named in `settings`
    pub fn connect(settings: Settings) -> Result<Self> {
        let backend = HttpBackend::from_settings(&settings.server)?;
        info!("Using backend at {}", backend.client().base_url());
        Ok(Self::new(settings, backend))
    }
}

impl<B> Engine<B>
where
    B: AlertBackend + Sync + 'static,
{
    pub fn new(settings: Settings, backend: B) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            backend: Arc::new(backend),
        }
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Kick off the startup loads: rules, channel settings and (optionally) logs
    pub fn start(&mut self) {
        self.process_message(Message::LoadRules);
        self.process_message(Message::LoadChannel);
        if self.state.settings.behavior.load_logs_on_start {
            self.process_message(Message::LoadLogs);
        }
    }

    /// Turn OS termination signals into `Message::Quit`
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.backend,
            &self.msg_tx,
            &self.shutdown_rx,
        );
    }

    /// Drain and process every message already queued.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Abandon in-flight requests
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        let _ = self.shutdown_tx.send(true);
    }
}
