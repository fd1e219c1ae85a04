//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use agrihub_core::{ChatMessage, DetectionState, Page, WeatherReading};

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// The active page changed
    PageChanged { from: Page, to: Page },

    // ─────────────────────────────────────────────────────────
    // Chat
    // ─────────────────────────────────────────────────────────
    /// A message was appended to the transcript
    MessageAppended { message: ChatMessage },

    // ─────────────────────────────────────────────────────────
    // Detection / Weather
    // ─────────────────────────────────────────────────────────
    /// The detection flow moved to another state
    DetectionChanged {
        from: DetectionState,
        to: DetectionState,
    },

    /// A new weather reading is displayed
    WeatherUpdated { reading: WeatherReading },

    // ─────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────
    /// An informational toast was shown
    Toast { message: String },

    /// A non-fatal error was surfaced to the user
    Error { message: String },

    /// Dark mode was switched
    DarkModeChanged { enabled: bool },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PageChanged { .. } => "page_changed",
            Self::MessageAppended { .. } => "message_appended",
            Self::DetectionChanged { .. } => "detection_changed",
            Self::WeatherUpdated { .. } => "weather_updated",
            Self::Toast { .. } => "toast",
            Self::Error { .. } => "error",
            Self::DarkModeChanged { .. } => "dark_mode_changed",
            Self::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrihub_core::Condition;

    #[test]
    fn test_engine_event_all_variants_have_labels() {
        let events = vec![
            EngineEvent::PageChanged {
                from: Page::Home,
                to: Page::Chat,
            },
            EngineEvent::MessageAppended {
                message: ChatMessage::sent("hi"),
            },
            EngineEvent::DetectionChanged {
                from: DetectionState::Idle,
                to: DetectionState::Previewing,
            },
            EngineEvent::WeatherUpdated {
                reading: WeatherReading {
                    temperature_c: 24,
                    humidity_pct: 60,
                    wind_kmh: 12,
                    rain_pct: 10,
                    condition: Condition::Sun,
                },
            },
            EngineEvent::Toast {
                message: "hello".into(),
            },
            EngineEvent::Error {
                message: "oops".into(),
            },
            EngineEvent::DarkModeChanged { enabled: true },
            EngineEvent::Shutdown,
        ];

        let labels: std::collections::HashSet<_> = events.iter().map(|e| e.event_type()).collect();
        assert_eq!(labels.len(), events.len());
    }
}
