//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel, the shutdown
//! signal, the periodic weather ticker and the event broadcast.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};

use agrihub_core::prelude::*;
use agrihub_core::{DetectionState, Page, WeatherReading};

use crate::config::{self, LocalStorage, Settings};
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::toast::ToastKind;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    page: Page,
    message_count: usize,
    detection: DetectionState,
    weather: WeatherReading,
    toast_id: Option<u64>,
    dark_mode: bool,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            page: state.page(),
            message_count: state.chat.len(),
            detection: state.detection.state(),
            weather: *state.weather.reading(),
            toast_id: state.toasts.current().map(|t| t.id),
            dark_mode: state.dark_mode,
        }
    }
}

/// Orchestration engine for AgriHub.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, timers, stdin).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    /// Directory holding config, storage and logs
    pub data_dir: PathBuf,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create a new Engine rooted at a data directory.
    ///
    /// Must be called inside a tokio runtime: it spawns the signal handler
    /// and the weather ticker.
    pub fn new(data_dir: PathBuf) -> Self {
        // Non-fatal: defaults still work without a writable data dir
        if let Err(e) = config::init_data_dir(&data_dir) {
            warn!("Failed to initialize data directory: {}", e);
        }

        let settings = config::load_settings(&data_dir);
        let storage = LocalStorage::in_dir(&data_dir);
        let state = AppState::with_settings(settings, Some(storage));

        Self::with_state(state, data_dir)
    }

    /// Create an Engine around a prepared state (seeded tests, scripted runs)
    pub fn with_state(state: AppState, data_dir: PathBuf) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        signals::spawn_signal_handler(msg_tx.clone());
        spawn_weather_ticker(
            state.settings.weather.tick_interval(),
            msg_tx.clone(),
            shutdown_rx.clone(),
        );

        info!(
            "Engine ready (data dir {:?}, dark mode {})",
            data_dir, state.dark_mode
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            data_dir,
            event_tx,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped and `RecvError::Lagged` is reported.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);
        process::process_message(&mut self.state, msg, &self.msg_tx);
        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
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

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Get a clone of the shutdown receiver for background tasks.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Signal background tasks to stop and tell subscribers we are done.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        let _ = self.shutdown_tx.send(true);
        // Let the ticker observe the signal before the runtime winds down
        tokio::task::yield_now().await;
        info!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.page != post.page {
            self.emit(EngineEvent::PageChanged {
                from: pre.page,
                to: post.page,
            });
        }

        if post.message_count > pre.message_count {
            for message in &self.state.chat.messages()[pre.message_count..] {
                self.emit(EngineEvent::MessageAppended {
                    message: message.clone(),
                });
            }
        }

        if pre.detection != post.detection {
            self.emit(EngineEvent::DetectionChanged {
                from: pre.detection,
                to: post.detection,
            });
        }

        if pre.weather != post.weather {
            self.emit(EngineEvent::WeatherUpdated {
                reading: post.weather,
            });
        }

        if pre.dark_mode != post.dark_mode {
            self.emit(EngineEvent::DarkModeChanged {
                enabled: post.dark_mode,
            });
        }

        if post.toast_id.is_some() && pre.toast_id != post.toast_id {
            if let Some(toast) = self.state.toasts.current() {
                let message = toast.text.clone();
                self.emit(match toast.kind {
                    ToastKind::Info => EngineEvent::Toast { message },
                    ToastKind::Error => EngineEvent::Error { message },
                });
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() only fails when nobody is subscribed, which is fine.
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}

/// Post `WeatherTick` every `period` until shutdown is signalled.
///
/// The first tick is skipped since the state already holds a fresh reading.
fn spawn_weather_ticker(
    period: Duration,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if *shutdown_rx.borrow() {
                        break;
                    }
                    if msg_tx.send(Message::WeatherTick).await.is_err() {
                        break;
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        debug!("Weather ticker stopped");
                        break;
                    }
                }
            }
        }
    });
}
