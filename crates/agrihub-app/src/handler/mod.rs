//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per page

pub mod keys;
pub mod update;


use std::path::PathBuf;
use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update.
///
/// Every variant is a one-shot background task that posts a message back
/// when it finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Deliver an assistant reply after `delay`
    ScheduleReply { text: String, delay: Duration },

    /// Complete the analysis identified by `ticket` after `delay`
    ScheduleAnalysis { ticket: u64, delay: Duration },

    /// Finish a manual weather refresh after `delay`
    ScheduleWeatherRefresh { delay: Duration },

    /// Dismiss the toast `id` after `delay`
    ScheduleToastDismiss { id: u64, delay: Duration },

    /// Append the canned topic exchange after `delay`
    ScheduleTopicExchange {
        topic_id: &'static str,
        delay: Duration,
    },

    /// Read an image file into a data URL
    LoadImage { path: PathBuf },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn both(msg: Message, action: UpdateAction) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
