//! TUI runner - entry points and event loop

use pricewatch_app::config::Settings;
use pricewatch_app::{AlertBackend, Engine};
use pricewatch_core::prelude::*;

use super::{event, render, terminal};

/// Connect to the configured backend and run the control panel until quit
pub async fn run(settings: Settings) -> Result<()> {
    let engine = Engine::connect(settings)?;
    run_with_engine(engine).await
}

/// Run the control panel on an already constructed engine
pub async fn run_with_engine<B>(mut engine: Engine<B>) -> Result<()>
where
    B: AlertBackend + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    engine.spawn_signal_handler();
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop: drain responses, draw, then wait briefly for input
fn run_loop<B>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<B>) -> Result<()>
where
    B: AlertBackend + Sync + 'static,
{
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &mut engine.state))
            .map_err(|e| event::terminal_failure("draw", e))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll().context("Failed to read terminal input")? {
            engine.process_message(message);
        }
    }

    info!("Quit requested");
    Ok(())
}
