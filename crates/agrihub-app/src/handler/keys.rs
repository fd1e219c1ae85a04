//! Key event handlers for each page

use agrihub_core::Page;

use crate::input_key::InputKey;
use crate::message::{Message, QuickAction};
use crate::state::AppState;

/// Convert key events to messages based on the active page and input focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere, including text inputs
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.detection.is_entering_path() {
        return handle_key_path_entry(key);
    }

    match state.page() {
        Page::Chat => handle_key_chat(key),
        Page::Home => handle_key_home(key).or_else(|| handle_key_global(key)),
        Page::Detection => handle_key_detection(key).or_else(|| handle_key_global(key)),
        Page::Advisory => handle_key_advisory(state, key).or_else(|| handle_key_global(key)),
        Page::Profile => handle_key_profile(key).or_else(|| handle_key_global(key)),
    }
}

/// Keys shared by pages that do not own a text input
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char(c @ '1'..='5') => page_for_digit(c).map(Message::Navigate),
        InputKey::Esc => Some(Message::Navigate(Page::Home)),
        _ => handle_key_page_switch(key),
    }
}

/// Page switching keys that never collide with typing
fn handle_key_page_switch(key: InputKey) -> Option<Message> {
    match key {
        InputKey::F(n @ 1..=5) => Page::from_index(usize::from(n - 1)).map(Message::Navigate),
        InputKey::Tab => Some(Message::NextPage),
        InputKey::BackTab => Some(Message::PrevPage),
        _ => None,
    }
}

fn page_for_digit(c: char) -> Option<Page> {
    let idx = c.to_digit(10)? as usize;
    Page::from_index(idx.checked_sub(1)?)
}

fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') => Some(Message::RefreshWeather),
        InputKey::Char(c) => QuickAction::from_key(c).map(Message::QuickAction),
        InputKey::Up => Some(Message::ScrollPageUp),
        InputKey::Down => Some(Message::ScrollPageDown),
        _ => None,
    }
}

fn handle_key_chat(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::ChatSubmit),
        InputKey::ShiftEnter => Some(Message::ChatNewline),
        InputKey::Backspace => Some(Message::ChatBackspace),
        InputKey::CharCtrl('u') => Some(Message::ChatClearInput),
        InputKey::Char(c) => Some(Message::ChatInput(c)),
        InputKey::Esc => Some(Message::Navigate(Page::Home)),
        InputKey::Up => Some(Message::ChatScrollUp),
        InputKey::Down => Some(Message::ChatScrollDown),
        InputKey::PageUp => Some(Message::ChatPageUp),
        InputKey::PageDown => Some(Message::ChatPageDown),
        InputKey::End => Some(Message::ChatScrollToBottom),
        InputKey::F(n @ 6..=9) => Some(Message::QuickReply(usize::from(n - 6))),
        _ => handle_key_page_switch(key),
    }
}

fn handle_key_detection(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('u') => Some(Message::StartPathEntry),
        InputKey::Char('c') => Some(Message::CaptureImage),
        InputKey::Char('a') | InputKey::Enter => Some(Message::AnalyzeImage),
        InputKey::Char('r') => Some(Message::ResetDetection),
        InputKey::Up => Some(Message::ScrollPageUp),
        InputKey::Down => Some(Message::ScrollPageDown),
        _ => None,
    }
}

fn handle_key_path_entry(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitPath),
        InputKey::Esc => Some(Message::CancelPathEntry),
        InputKey::Backspace => Some(Message::PathBackspace),
        InputKey::Char(c) => Some(Message::PathInput(c)),
        _ => None,
    }
}

fn handle_key_advisory(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Right => Some(Message::AdvisorySwitchTab),
        InputKey::Up => Some(Message::AdvisorySelectPrev),
        InputKey::Down => Some(Message::AdvisorySelectNext),
        InputKey::Enter => Some(Message::OpenSelectedTopic),
        InputKey::Char('c') => Some(Message::AskSelectedTopic),
        InputKey::Esc if state.advisory.open_topic().is_some() => Some(Message::CloseTopic),
        _ => None,
    }
}

fn handle_key_profile(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('t') => Some(Message::ToggleDarkMode),
        InputKey::Up => Some(Message::ScrollPageUp),
        InputKey::Down => Some(Message::ScrollPageDown),
        _ => None,
    }
}
