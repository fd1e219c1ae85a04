//! # agrihub-core - Core Domain Types
//!
//! Foundation crate for AgriHub. Provides domain types, the static content
//! tables, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Page`] - The closed set of top-level views
//! - [`ChatMessage`], [`Direction`] - Transcript entries
//! - [`DetectionState`], [`ImageRef`] - Disease detection flow
//! - [`WeatherReading`], [`Condition`] - Simulated weather
//! - [`CropStatus`] - Crop health classification
//!
//! ### Content (`content`)
//! - [`ProfileStore`], [`PROFILE`], [`CROP_HEALTH`] - Static farmer profile and crop table
//! - [`ADVISORY_TOPICS`], [`lookup_topic()`] - Advisory catalog
//! - [`DETECTION_REPORT`] - Canned analysis result
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use agrihub_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all AgriHub crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{
    chat_greeting, lookup_topic, quick_reply, time_greeting, topics_in, AdvisoryTab, AdvisoryTopic,
    CropHealthEntry, DetectionReport, ProfileStore, UserProfile, ADVISORY_TOPICS, CAPTURE_IMAGE_URL,
    CROP_HEALTH, DETECTION_REPORT, MARKET_PRICES_MESSAGE, PROFILE, QUICK_REPLIES,
    QUICK_REPLY_ANSWER,
};
pub use error::{Error, Result, ResultExt};
pub use types::{
    ChatMessage, Condition, CropStatus, DetectionState, Direction, ImageRef, Page, WeatherReading,
};
