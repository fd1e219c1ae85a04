//! Headless mode - NDJSON event output for scripted runs and E2E tests
//!
//! Reads line commands from stdin and writes one JSON object per state
//! change to stdout. Each event has an "event" field naming its type and a
//! millisecond "timestamp".
//!
//! # Example Output
//!
//! ```json
//! {"event":"page_changed","from":"home","to":"chat","timestamp":1704700001000}
//! {"event":"message_appended","direction":"sent","text":"hello","time":"09:14","timestamp":1704700001002}
//! {"event":"detection_changed","from":"previewing","to":"analyzing","timestamp":1704700004000}
//! ```

pub mod command;
pub mod runner;

use agrihub_app::EngineEvent;
use agrihub_core::{Condition, DetectionState, Direction, Page};
use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    PageChanged {
        from: Page,
        to: Page,
        timestamp: i64,
    },

    MessageAppended {
        direction: Direction,
        text: String,
        /// `HH:MM` as shown in the transcript
        time: String,
        timestamp: i64,
    },

    DetectionChanged {
        from: DetectionState,
        to: DetectionState,
        timestamp: i64,
    },

    WeatherUpdated {
        temperature_c: i32,
        humidity_pct: i32,
        wind_kmh: i32,
        rain_pct: i32,
        condition: Condition,
        timestamp: i64,
    },

    Toast {
        message: String,
        timestamp: i64,
    },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    DarkModeChanged {
        enabled: bool,
        timestamp: i64,
    },

    Shutdown {
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

impl From<&EngineEvent> for HeadlessEvent {
    fn from(event: &EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::PageChanged { from, to } => Self::PageChanged {
                from: *from,
                to: *to,
                timestamp,
            },
            EngineEvent::MessageAppended { message } => Self::MessageAppended {
                direction: message.direction,
                text: message.text.clone(),
                time: message.time_label(),
                timestamp,
            },
            EngineEvent::DetectionChanged { from, to } => Self::DetectionChanged {
                from: *from,
                to: *to,
                timestamp,
            },
            EngineEvent::WeatherUpdated { reading } => Self::WeatherUpdated {
                temperature_c: reading.temperature_c,
                humidity_pct: reading.humidity_pct,
                wind_kmh: reading.wind_kmh,
                rain_pct: reading.rain_pct,
                condition: reading.condition,
                timestamp,
            },
            EngineEvent::Toast { message } => Self::Toast {
                message: message.clone(),
                timestamp,
            },
            EngineEvent::Error { message } => Self::Error {
                message: message.clone(),
                fatal: false,
                timestamp,
            },
            EngineEvent::DarkModeChanged { enabled } => Self::DarkModeChanged {
                enabled: *enabled,
                timestamp,
            },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }
}
