//! Configuration types for AgriHub
//!
//! Every field is optional in `config.toml`; missing fields fall back to the
//! defaults below.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application settings (`<data_dir>/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub chat: ChatSettings,

    #[serde(default)]
    pub detection: DetectionSettings,

    #[serde(default)]
    pub weather: WeatherSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Chat assistant settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatSettings {
    /// Lower bound of the simulated reply delay (inclusive)
    #[serde(default = "default_reply_delay_min_ms")]
    pub reply_delay_min_ms: u64,

    /// Upper bound of the simulated reply delay (exclusive unless equal to min)
    #[serde(default = "default_reply_delay_max_ms")]
    pub reply_delay_max_ms: u64,

    /// Fixed delay before the answer to a quick-reply chip
    #[serde(default = "default_quick_reply_delay_ms")]
    pub quick_reply_delay_ms: u64,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            reply_delay_min_ms: default_reply_delay_min_ms(),
            reply_delay_max_ms: default_reply_delay_max_ms(),
            quick_reply_delay_ms: default_quick_reply_delay_ms(),
        }
    }
}

impl ChatSettings {
    pub fn quick_reply_delay(&self) -> Duration {
        Duration::from_millis(self.quick_reply_delay_ms)
    }
}

fn default_reply_delay_min_ms() -> u64 {
    1000
}

fn default_reply_delay_max_ms() -> u64 {
    3000
}

fn default_quick_reply_delay_ms() -> u64 {
    1000
}

/// Disease detection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DetectionSettings {
    /// Simulated analysis time
    #[serde(default = "default_analysis_delay_ms")]
    pub analysis_delay_ms: u64,

    /// Reset the flow to idle whenever the detection page is entered
    #[serde(default)]
    pub reset_on_enter: bool,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            analysis_delay_ms: default_analysis_delay_ms(),
            reset_on_enter: false,
        }
    }
}

impl DetectionSettings {
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

fn default_analysis_delay_ms() -> u64 {
    2000
}

/// Weather simulator settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeatherSettings {
    /// Seconds between automatic full regenerations
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,

    /// Delay before a manual refresh lands
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            tick_interval_secs: default_tick_interval_secs(),
            refresh_delay_ms: default_refresh_delay_ms(),
        }
    }
}

impl WeatherSettings {
    /// Tick interval, never shorter than one second
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs.max(1))
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }
}

fn default_tick_interval_secs() -> u64 {
    1800
}

fn default_refresh_delay_ms() -> u64 {
    1000
}

/// UI timing settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a toast stays visible
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Delay between asking about a topic and the chat exchange appearing
    #[serde(default = "default_topic_open_delay_ms")]
    pub topic_open_delay_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            topic_open_delay_ms: default_topic_open_delay_ms(),
        }
    }
}

impl UiSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn topic_open_delay(&self) -> Duration {
        Duration::from_millis(self.topic_open_delay_ms)
    }
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_topic_open_delay_ms() -> u64 {
    500
}
