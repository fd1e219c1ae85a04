//! AgriHub - a terminal farming assistant
//!
//! The binary runs either the ratatui frontend from `agrihub-tui` or the
//! headless NDJSON runner defined here.

pub mod headless;

pub use agrihub_tui::run;
pub use headless::runner::run_headless;
