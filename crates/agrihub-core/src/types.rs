//! Core domain types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Pages
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level view of the application. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Chat,
    Detection,
    Advisory,
    Profile,
}

impl Page {
    /// All pages in nav bar order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Chat,
        Page::Detection,
        Page::Advisory,
        Page::Profile,
    ];

    /// Stable string id, as used by navigation requests
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Chat => "chat",
            Page::Detection => "detection",
            Page::Advisory => "advisory",
            Page::Profile => "profile",
        }
    }

    /// Label shown in the nav bar and header
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Chat => "Chat",
            Page::Detection => "Detect",
            Page::Advisory => "Advisory",
            Page::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Home => 0,
            Page::Chat => 1,
            Page::Detection => 2,
            Page::Advisory => 3,
            Page::Profile => 4,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| Error::invalid_page(s))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

/// Who a chat message came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Typed by the user
    Sent,
    /// Produced by the assistant
    Received,
}

/// A single transcript entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub text: String,
    pub direction: Direction,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, direction: Direction) -> Self {
        Self {
            text: text.into(),
            direction,
            timestamp: Local::now(),
        }
    }

    pub fn sent(text: impl Into<String>) -> Self {
        Self::new(text, Direction::Sent)
    }

    pub fn received(text: impl Into<String>) -> Self {
        Self::new(text, Direction::Received)
    }

    /// Hour and minute, e.g. `09:41`
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Phase of the disease detection flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionState {
    #[default]
    Idle,
    Previewing,
    Analyzing,
    ResultReady,
}

impl DetectionState {
    pub fn label(&self) -> &'static str {
        match self {
            DetectionState::Idle => "Idle",
            DetectionState::Previewing => "Preview",
            DetectionState::Analyzing => "Analyzing...",
            DetectionState::ResultReady => "Result",
        }
    }
}

/// Reference to an image shown in the detection flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ImageRef {
    /// `data:<mime>;base64,<payload>` built from a local file
    DataUrl(String),
    /// Remote image address
    Url(String),
}

impl ImageRef {
    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::DataUrl(s) | ImageRef::Url(s) => s,
        }
    }

    /// Short human-readable description for display
    pub fn describe(&self) -> String {
        match self {
            ImageRef::DataUrl(s) => {
                let mime = s
                    .strip_prefix("data:")
                    .and_then(|rest| rest.split(';').next())
                    .unwrap_or("unknown");
                let payload = s.split_once(',').map(|(_, p)| p.len()).unwrap_or(0);
                format!("{} image ({} bytes encoded)", mime, payload)
            }
            ImageRef::Url(url) => url.clone(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Weather
// ─────────────────────────────────────────────────────────────────────────────

/// Sky condition shown by the weather widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Sun,
    Cloud,
    CloudSun,
    CloudRain,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Sun,
        Condition::Cloud,
        Condition::CloudSun,
        Condition::CloudRain,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sun => "Sunny",
            Condition::Cloud => "Cloudy",
            Condition::CloudSun => "Partly cloudy",
            Condition::CloudRain => "Rain",
        }
    }
}

/// A complete simulated weather reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: i32,
    pub humidity_pct: i32,
    pub wind_kmh: i32,
    pub rain_pct: i32,
    pub condition: Condition,
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────────────────────────

/// Health of a monitored crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStatus {
    Healthy,
    Warning,
    Danger,
}

impl CropStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CropStatus::Healthy => "Healthy",
            CropStatus::Warning => "Warning",
            CropStatus::Danger => "Danger",
        }
    }
}
