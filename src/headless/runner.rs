//! Headless mode runner - main event loop without TUI

use std::path::Path;

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use agrihub_app::{Engine, EngineEvent, Message};
use agrihub_core::prelude::Result;

use super::command::{parse_command, Command};
use super::HeadlessEvent;

/// Run in headless mode - NDJSON events instead of the TUI
pub async fn run_headless(data_dir: &Path) -> Result<()> {
    info!("AgriHub starting in headless mode (data dir {})", data_dir.display());

    let mut engine = Engine::new(data_dir.to_path_buf());
    let mut events = engine.subscribe();

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    let result = headless_event_loop(&mut engine, &mut events).await;

    engine.shutdown().await;
    flush_events(&mut events);

    info!("AgriHub headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Result<()> {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => {
                engine.process_message(msg);
                flush_events(events);
            }
            None => {
                info!("Message channel closed");
                break;
            }
        }
    }

    Ok(())
}

/// Write every queued engine event to stdout
pub fn flush_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => HeadlessEvent::from(&event).emit(),
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                warn!("Headless output lagged, {} events dropped", n);
            }
            Err(_) => break,
        }
    }
}

/// Read commands from stdin until EOF or `quit` (blocking, own thread)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Ok(Some(Command::Send(msg))) => {
                let quit = matches!(msg, Message::Quit);
                if msg_tx.blocking_send(msg).is_err() || quit {
                    break;
                }
            }
            Ok(Some(Command::Wait(delay))) => std::thread::sleep(delay),
            Ok(None) => {}
            Err(e) => {
                warn!("Stdin: {}", e);
                // Surface through the engine so it appears as an error event
                if msg_tx.blocking_send(Message::error_toast(e.to_string())).is_err() {
                    break;
                }
            }
        }
    }

    // End of input ends the session
    let _ = msg_tx.blocking_send(Message::Quit);
    info!("Stdin reader exiting");
}
