//! Main TUI runner - entry point and event loop

use std::path::Path;

use agrihub_app::Engine;
use agrihub_core::prelude::*;

use super::{event, render, terminal};

/// Run the interactive TUI with state rooted at `data_dir`
pub async fn run(data_dir: &Path) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(data_dir.to_path_buf());
    info!(
        "Loaded settings: weather tick every {:?}",
        engine.settings().weather.tick_interval()
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Timer completions, weather ticks and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quit requested, leaving TUI loop");
    Ok(())
}
