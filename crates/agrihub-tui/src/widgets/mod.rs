//! Page and chrome widgets

mod advisory;
mod chat;
mod detection;
mod header;
mod home;
mod nav_bar;
mod profile;
mod toast;

pub use advisory::AdvisoryView;
pub use chat::ChatView;
pub use detection::DetectionView;
pub use header::MainHeader;
pub use home::HomeView;
pub use nav_bar::NavBar;
pub use profile::ProfileView;
pub use toast::ToastBar;
