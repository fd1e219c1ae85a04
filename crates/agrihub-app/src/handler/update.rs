//! Main update function - handles state transitions (TEA pattern)

use agrihub_core::prelude::*;
use agrihub_core::{lookup_topic, ImageRef, Page, CAPTURE_IMAGE_URL, MARKET_PRICES_MESSAGE};

use crate::chat::reply_delay;
use crate::message::{Message, QuickAction};
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Lines moved by page up/down in the chat transcript
const CHAT_PAGE_SIZE: usize = 5;

/// Lines moved per scroll step on scrollable pages
const PAGE_SCROLL_STEP: u16 = 1;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // Redraw only; the header clock reads the wall clock
        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(page) => handle_navigate(state, page),

        Message::NavigateTo(id) => match id.parse::<Page>() {
            Ok(page) => handle_navigate(state, page),
            Err(e) => {
                warn!("Navigation rejected: {}", e);
                UpdateResult::message(Message::error_toast(e.to_string()))
            }
        },

        Message::NextPage => {
            let next = state.page().next();
            handle_navigate(state, next)
        }

        Message::PrevPage => {
            let prev = state.page().prev();
            handle_navigate(state, prev)
        }

        Message::ScrollPageUp => {
            state.router.scroll_up(PAGE_SCROLL_STEP);
            UpdateResult::none()
        }

        Message::ScrollPageDown => {
            state.router.scroll_down(PAGE_SCROLL_STEP);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Chat
        // ─────────────────────────────────────────────────────────
        Message::ChatInput(c) => {
            state.chat.insert_char(c);
            UpdateResult::none()
        }

        Message::ChatNewline => {
            state.chat.insert_newline();
            UpdateResult::none()
        }

        Message::ChatBackspace => {
            state.chat.backspace();
            UpdateResult::none()
        }

        Message::ChatClearInput => {
            state.chat.clear_input();
            UpdateResult::none()
        }

        Message::ChatSubmit => match state.chat.take_input() {
            Some(text) => UpdateResult::message(Message::SendChat(text)),
            None => UpdateResult::none(),
        },

        Message::SendChat(text) => handle_send_chat(state, &text),

        Message::QuickReply(index) => match state.chat.send_quick_reply(index) {
            Ok(answer) => UpdateResult::action(UpdateAction::ScheduleReply {
                text: answer.to_string(),
                delay: state.settings.chat.quick_reply_delay(),
            }),
            Err(e) => {
                debug!("Quick reply rejected: {}", e);
                UpdateResult::message(Message::error_toast(e.to_string()))
            }
        },

        Message::ChatReplyReady { text } => {
            state.chat.deliver_reply(text);
            UpdateResult::none()
        }

        Message::ChatScrollUp => {
            state.chat.scroll_up(1);
            UpdateResult::none()
        }

        Message::ChatScrollDown => {
            state.chat.scroll_down(1);
            UpdateResult::none()
        }

        Message::ChatPageUp => {
            state.chat.scroll_up(CHAT_PAGE_SIZE);
            UpdateResult::none()
        }

        Message::ChatPageDown => {
            state.chat.scroll_down(CHAT_PAGE_SIZE);
            UpdateResult::none()
        }

        Message::ChatScrollToBottom => {
            state.chat.scroll_to_bottom();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detection
        // ─────────────────────────────────────────────────────────
        Message::StartPathEntry => {
            state.detection.begin_path_entry();
            UpdateResult::none()
        }

        Message::PathInput(c) => {
            state.detection.path_push(c);
            UpdateResult::none()
        }

        Message::PathBackspace => {
            state.detection.path_backspace();
            UpdateResult::none()
        }

        Message::CancelPathEntry => {
            state.detection.cancel_path_entry();
            UpdateResult::none()
        }

        Message::SubmitPath => match state.detection.take_path() {
            Some(path) => UpdateResult::message(Message::SelectImageFile(path)),
            None => UpdateResult::none(),
        },

        Message::SelectImageFile(path) => {
            if !state.detection.can_select() {
                debug!("Ignoring file selection while {:?}", state.detection.state());
                return UpdateResult::none();
            }
            info!("Loading image {:?}", path);
            UpdateResult::action(UpdateAction::LoadImage { path })
        }

        Message::ImageLoaded { path, image } => {
            if state.detection.select_image(image) {
                debug!("Previewing {:?}", path);
            }
            UpdateResult::none()
        }

        Message::ImageLoadFailed { path, error } => {
            warn!("Failed to read image {:?}: {}", path, error);
            UpdateResult::message(Message::error_toast(format!(
                "Could not read {}: {}",
                path.display(),
                error
            )))
        }

        Message::CaptureImage => {
            state
                .detection
                .select_image(ImageRef::Url(CAPTURE_IMAGE_URL.to_string()));
            UpdateResult::none()
        }

        Message::AnalyzeImage => match state.detection.analyze() {
            Some(ticket) => {
                info!("Analyzing image (ticket {})", ticket);
                UpdateResult::action(UpdateAction::ScheduleAnalysis {
                    ticket,
                    delay: state.settings.detection.analysis_delay(),
                })
            }
            None => UpdateResult::none(),
        },

        Message::AnalysisComplete { ticket } => {
            if state.detection.complete(ticket) {
                info!("Analysis {} complete", ticket);
            }
            UpdateResult::none()
        }

        Message::ResetDetection => {
            state.detection.reset();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Weather
        // ─────────────────────────────────────────────────────────
        Message::WeatherTick => {
            state.weather.tick(&mut state.rng);
            debug!("Weather tick: {:?}", state.weather.reading());
            UpdateResult::none()
        }

        Message::RefreshWeather => {
            if !state.weather.begin_refresh() {
                debug!("Weather refresh already in progress");
                return UpdateResult::none();
            }
            UpdateResult::action(UpdateAction::ScheduleWeatherRefresh {
                delay: state.settings.weather.refresh_delay(),
            })
        }

        Message::WeatherRefreshed => {
            state.weather.refresh(&mut state.rng);
            UpdateResult::message(Message::info_toast("Weather data updated"))
        }

        // ─────────────────────────────────────────────────────────
        // Advisory
        // ─────────────────────────────────────────────────────────
        Message::AdvisorySwitchTab => {
            state.advisory.switch_tab();
            UpdateResult::none()
        }

        Message::AdvisorySelectNext => {
            state.advisory.select_next();
            UpdateResult::none()
        }

        Message::AdvisorySelectPrev => {
            state.advisory.select_prev();
            UpdateResult::none()
        }

        Message::OpenSelectedTopic => {
            state.advisory.open_selected();
            UpdateResult::none()
        }

        Message::OpenTopic(id) => match state.advisory.open(&id) {
            Ok(_) => handle_navigate(state, Page::Advisory),
            Err(e) => {
                warn!("{}", e);
                UpdateResult::message(Message::error_toast(e.to_string()))
            }
        },

        Message::CloseTopic => {
            state.advisory.close();
            UpdateResult::none()
        }

        Message::AskSelectedTopic => match state.advisory.selected_topic() {
            Some(topic) => UpdateResult::message(Message::AskTopic(topic.id.to_string())),
            None => UpdateResult::none(),
        },

        Message::AskTopic(id) => match lookup_topic(&id) {
            Ok(topic) => UpdateResult::both(
                Message::info_toast(format!(
                    "Loading information about {}",
                    topic.display_id()
                )),
                UpdateAction::ScheduleTopicExchange {
                    topic_id: topic.id,
                    delay: state.settings.ui.topic_open_delay(),
                },
            ),
            Err(e) => {
                warn!("{}", e);
                UpdateResult::message(Message::error_toast(e.to_string()))
            }
        },

        Message::TopicExchangeReady { topic_id } => match lookup_topic(topic_id) {
            Ok(topic) => {
                state.chat.append_exchange(
                    format!("I need information about {}", topic.title),
                    format!("Here's detailed information about {}...", topic.title),
                );
                UpdateResult::message(Message::Navigate(Page::Chat))
            }
            Err(e) => {
                error!("Scheduled exchange for missing topic: {}", e);
                UpdateResult::none()
            }
        },

        // ─────────────────────────────────────────────────────────
        // Home / Profile
        // ─────────────────────────────────────────────────────────
        Message::QuickAction(action) => handle_quick_action(state, action),

        Message::ToggleDarkMode => handle_toggle_dark_mode(state),

        // ─────────────────────────────────────────────────────────
        // Toasts
        // ─────────────────────────────────────────────────────────
        Message::ShowToast { text, kind } => {
            let id = state.toasts.show(text, kind);
            UpdateResult::action(UpdateAction::ScheduleToastDismiss {
                id,
                delay: state.settings.ui.toast_duration(),
            })
        }

        Message::DismissToast { id } => {
            state.toasts.dismiss(id);
            UpdateResult::none()
        }
    }
}

fn handle_navigate(state: &mut AppState, page: Page) -> UpdateResult {
    let from = state.page();
    state.router.navigate(page);

    match page {
        Page::Chat => state.chat.scroll_to_bottom(),
        Page::Detection if from != Page::Detection && state.settings.detection.reset_on_enter => {
            state.detection.reset();
        }
        _ => {}
    }

    UpdateResult::none()
}

fn handle_send_chat(state: &mut AppState, text: &str) -> UpdateResult {
    match state.chat.send_user_message(text) {
        Ok(reply) => {
            let delay = reply_delay(&mut state.rng, &state.settings.chat);
            debug!("Reply scheduled in {:?}", delay);
            UpdateResult::action(UpdateAction::ScheduleReply {
                text: reply.to_string(),
                delay,
            })
        }
        Err(e) => {
            debug!("Chat send rejected: {}", e);
            UpdateResult::message(Message::error_toast(e.to_string()))
        }
    }
}

fn handle_quick_action(state: &mut AppState, action: QuickAction) -> UpdateResult {
    debug!("Quick action: {}", action);
    match action {
        QuickAction::Chat => handle_navigate(state, Page::Chat),
        QuickAction::Detect => handle_navigate(state, Page::Detection),
        QuickAction::Market => {
            state.chat.append_received(MARKET_PRICES_MESSAGE);
            handle_navigate(state, Page::Chat)
        }
        QuickAction::Weather => {
            handle_navigate(state, Page::Home);
            UpdateResult::message(Message::RefreshWeather)
        }
        QuickAction::Community => {
            UpdateResult::message(Message::info_toast("Community feature coming soon!"))
        }
        QuickAction::Finance => {
            UpdateResult::message(Message::info_toast("Farm finance feature coming soon!"))
        }
        QuickAction::Tasks => {
            handle_navigate(state, Page::Advisory);
            UpdateResult::message(Message::info_toast("Opening your task list"))
        }
    }
}

fn handle_toggle_dark_mode(state: &mut AppState) -> UpdateResult {
    state.dark_mode = !state.dark_mode;
    info!("Dark mode {}", if state.dark_mode { "on" } else { "off" });

    if let Some(storage) = &state.storage {
        if let Err(e) = storage.set_dark_mode(state.dark_mode) {
            warn!("Failed to persist dark mode: {}", e);
            return UpdateResult::message(Message::error_toast(format!(
                "Could not save preference: {}",
                e
            )));
        }
    }

    let text = if state.dark_mode {
        "Dark mode enabled"
    } else {
        "Dark mode disabled"
    };
    UpdateResult::message(Message::info_toast(text))
}
