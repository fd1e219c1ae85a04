//! Application state (Model in TEA pattern)

use rand::rngs::StdRng;
use rand::SeedableRng;

use agrihub_core::{Page, ProfileStore};

use crate::advisory::AdvisoryState;
use crate::chat::ChatSession;
use crate::config::{LocalStorage, Settings};
use crate::detection::DetectionFlow;
use crate::router::ViewRouter;
use crate::toast::Toasts;
use crate::weather::WeatherSimulator;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub router: ViewRouter,
    pub chat: ChatSession,
    pub detection: DetectionFlow,
    pub weather: WeatherSimulator,
    pub advisory: AdvisoryState,
    pub profile: ProfileStore,
    pub toasts: Toasts,

    /// Dark palette active
    pub dark_mode: bool,

    /// Preference store; `None` keeps preferences in memory only
    pub storage: Option<LocalStorage>,

    pub settings: Settings,

    /// Randomness for reply delays and weather simulation
    pub rng: StdRng,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default settings, no persistence, entropy-seeded randomness
    pub fn new() -> Self {
        Self::with_rng(Settings::default(), None, StdRng::from_entropy())
    }

    /// State for a configured run; dark mode is read from `storage`
    pub fn with_settings(settings: Settings, storage: Option<LocalStorage>) -> Self {
        Self::with_rng(settings, storage, StdRng::from_entropy())
    }

    /// Deterministic state for tests and scripted runs
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, None, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: Settings, storage: Option<LocalStorage>, mut rng: StdRng) -> Self {
        let dark_mode = storage.as_ref().is_some_and(LocalStorage::dark_mode);
        let weather = WeatherSimulator::new(&mut rng);

        Self {
            phase: AppPhase::Running,
            router: ViewRouter::new(),
            chat: ChatSession::new(),
            detection: DetectionFlow::new(),
            weather,
            advisory: AdvisoryState::new(),
            profile: ProfileStore,
            toasts: Toasts::new(),
            dark_mode,
            storage,
            settings,
            rng,
        }
    }

    pub fn page(&self) -> Page {
        self.router.active()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.page(), Page::Home);
        assert_eq!(state.chat.len(), 1);
        assert!(!state.dark_mode);
        assert!(!state.should_quit());
        assert!(state.toasts.current().is_none());
    }

    #[test]
    fn test_dark_mode_loaded_from_storage() {
        let temp = tempdir().unwrap();
        let storage = LocalStorage::in_dir(temp.path());
        storage.set_dark_mode(true).unwrap();

        let state = AppState::with_settings(Settings::default(), Some(storage));
        assert!(state.dark_mode);
    }

    #[test]
    fn test_seeded_states_match() {
        let a = AppState::with_seed(Settings::default(), 5);
        let b = AppState::with_seed(Settings::default(), 5);
        assert_eq!(a.weather.reading(), b.weather.reading());
    }
}
