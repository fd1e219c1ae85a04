//! Message types for the application (TEA pattern)

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use agrihub_core::{Error, ImageRef, Page};

use crate::input_key::InputKey;
use crate::toast::ToastKind;

/// Home page shortcut buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Chat,
    Detect,
    Market,
    Weather,
    Community,
    Finance,
    /// Open the advisory task cards
    Tasks,
}

impl QuickAction {
    pub const ALL: [QuickAction; 7] = [
        QuickAction::Chat,
        QuickAction::Detect,
        QuickAction::Market,
        QuickAction::Weather,
        QuickAction::Community,
        QuickAction::Finance,
        QuickAction::Tasks,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            QuickAction::Chat => "chat",
            QuickAction::Detect => "detect",
            QuickAction::Market => "market",
            QuickAction::Weather => "weather",
            QuickAction::Community => "community",
            QuickAction::Finance => "finance",
            QuickAction::Tasks => "tasks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::Chat => "Ask Expert",
            QuickAction::Detect => "Detect Disease",
            QuickAction::Market => "Market Prices",
            QuickAction::Weather => "Weather",
            QuickAction::Community => "Community",
            QuickAction::Finance => "Farm Finance",
            QuickAction::Tasks => "View Tasks",
        }
    }

    /// Key that triggers this action on the home page
    pub fn key(&self) -> char {
        match self {
            QuickAction::Chat => 'c',
            QuickAction::Detect => 'd',
            QuickAction::Market => 'm',
            QuickAction::Weather => 'w',
            QuickAction::Community => 'o',
            QuickAction::Finance => 'f',
            QuickAction::Tasks => 't',
        }
    }

    pub fn from_key(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.key() == c)
    }
}

impl FromStr for QuickAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickAction::ALL
            .into_iter()
            .find(|action| action.id() == s)
            .ok_or_else(|| Error::unknown_command(format!("quick {}", s)))
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraws
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Switch to a known page
    Navigate(Page),
    /// Switch to a page by string id (may be invalid)
    NavigateTo(String),
    NextPage,
    PrevPage,
    ScrollPageUp,
    ScrollPageDown,

    // ─────────────────────────────────────────────────────────
    // Chat
    // ─────────────────────────────────────────────────────────
    ChatInput(char),
    ChatNewline,
    ChatBackspace,
    ChatClearInput,
    /// Submit the input buffer
    ChatSubmit,
    /// Send a complete user message
    SendChat(String),
    /// Send the quick-reply chip at this index
    QuickReply(usize),
    /// A scheduled assistant reply is due
    ChatReplyReady { text: String },
    ChatScrollUp,
    ChatScrollDown,
    ChatPageUp,
    ChatPageDown,
    ChatScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Detection
    // ─────────────────────────────────────────────────────────
    StartPathEntry,
    PathInput(char),
    PathBackspace,
    CancelPathEntry,
    SubmitPath,
    /// Read a local image file for preview
    SelectImageFile(PathBuf),
    ImageLoaded { path: PathBuf, image: ImageRef },
    ImageLoadFailed { path: PathBuf, error: String },
    /// Simulated camera capture
    CaptureImage,
    AnalyzeImage,
    AnalysisComplete { ticket: u64 },
    ResetDetection,

    // ─────────────────────────────────────────────────────────
    // Weather
    // ─────────────────────────────────────────────────────────
    /// Periodic full regeneration
    WeatherTick,
    /// Manual refresh request
    RefreshWeather,
    /// Manual refresh delay elapsed
    WeatherRefreshed,

    // ─────────────────────────────────────────────────────────
    // Advisory
    // ─────────────────────────────────────────────────────────
    AdvisorySwitchTab,
    AdvisorySelectNext,
    AdvisorySelectPrev,
    OpenSelectedTopic,
    OpenTopic(String),
    CloseTopic,
    AskSelectedTopic,
    /// Ask about a topic in chat
    AskTopic(String),
    /// Topic deep-link delay elapsed
    TopicExchangeReady { topic_id: &'static str },

    // ─────────────────────────────────────────────────────────
    // Home / Profile
    // ─────────────────────────────────────────────────────────
    QuickAction(QuickAction),
    ToggleDarkMode,

    // ─────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────
    ShowToast { text: String, kind: ToastKind },
    DismissToast { id: u64 },
}

impl Message {
    pub fn info_toast(text: impl Into<String>) -> Self {
        Message::ShowToast {
            text: text.into(),
            kind: ToastKind::Info,
        }
    }

    pub fn error_toast(text: impl Into<String>) -> Self {
        Message::ShowToast {
            text: text.into(),
            kind: ToastKind::Error,
        }
    }
}
