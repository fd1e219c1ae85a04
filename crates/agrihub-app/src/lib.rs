//! agrihub-app - Application state and orchestration for AgriHub
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: `Message` -> `handler::update()` -> `AppState`, with the
//! `Engine` owning the message channel, timers and event broadcast shared by
//! the TUI and headless runners.

pub mod actions;
pub mod advisory;
pub mod chat;
pub mod config;
pub mod detection;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod router;
pub mod signals;
pub mod state;
pub mod toast;
pub mod weather;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, QuickAction};
pub use state::{AppPhase, AppState};
pub use toast::{Toast, ToastKind};
