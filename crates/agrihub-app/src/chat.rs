//! Chat session - transcript, input buffer and scripted replies

use std::time::Duration;

use rand::Rng;

use agrihub_core::prelude::*;
use agrihub_core::{chat_greeting, quick_reply, ChatMessage, PROFILE, QUICK_REPLY_ANSWER};

use crate::config::ChatSettings;

// ─────────────────────────────────────────────────────────────────────────────
// Reply rules
// ─────────────────────────────────────────────────────────────────────────────

/// A keyword rule: any keyword found in the lower-cased message selects `reply`
#[derive(Debug, Clone, Copy)]
pub struct ReplyRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

/// Ordered rules; first match wins
pub const REPLY_RULES: [ReplyRule; 4] = [
    ReplyRule {
        keywords: &["hello", "hi"],
        reply: "Hello there! How can I assist with your farming today?",
    },
    ReplyRule {
        keywords: &["pest"],
        reply: "For pest control, I recommend identifying the specific pest first. Could you describe or send a photo of the affected plants?",
    },
    ReplyRule {
        keywords: &["disease"],
        reply: "Plant diseases can be tricky. Common signs include spots, wilting, or discoloration. A photo would help with accurate diagnosis.",
    },
    ReplyRule {
        keywords: &["weather"],
        reply: "Based on your location, the weather forecast shows... (would connect to real API in production)",
    },
];

pub const DEFAULT_REPLY: &str = "I understand your question about farming. For more specific advice, could you provide details like crop type, symptoms, and preferably an image?";

/// Pick the canned reply for a user message.
///
/// Plain substring matching, so "this" matches the `hi` keyword.
pub fn select_reply(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|rule| rule.reply)
        .unwrap_or(DEFAULT_REPLY)
}

/// Reply delay drawn uniformly from `[min, max)`; equal bounds give `min`
pub fn reply_delay<R: Rng>(rng: &mut R, settings: &ChatSettings) -> Duration {
    let min = settings.reply_delay_min_ms;
    let max = settings.reply_delay_max_ms;
    let ms = if max > min { rng.gen_range(min..max) } else { min };
    Duration::from_millis(ms)
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    input: String,
    /// Messages scrolled back from the latest; 0 follows new messages
    scroll_back: usize,
    /// Replies scheduled but not yet delivered
    pending_replies: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// New session opened with the assistant greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::received(chat_greeting(&PROFILE))],
            input: String::new(),
            scroll_back: 0,
            pending_replies: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Append the user's message and return the reply to deliver later.
    ///
    /// Whitespace-only text fails with [`Error::EmptyMessage`] and leaves the
    /// transcript unchanged.
    pub fn send_user_message(&mut self, text: &str) -> Result<&'static str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyMessage);
        }

        self.push(ChatMessage::sent(trimmed));
        self.pending_replies += 1;
        Ok(select_reply(trimmed))
    }

    /// Send the quick-reply chip at `index` and return its canned answer
    pub fn send_quick_reply(&mut self, index: usize) -> Result<&'static str> {
        let text = quick_reply(index).ok_or(Error::QuickReplyNotFound { number: index + 1 })?;
        self.push(ChatMessage::sent(text));
        self.pending_replies += 1;
        Ok(QUICK_REPLY_ANSWER)
    }

    /// Deliver a reply scheduled by [`ChatSession::send_user_message`]
    pub fn deliver_reply(&mut self, text: impl Into<String>) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.push(ChatMessage::received(text));
    }

    /// Append an assistant message that was not requested by the user
    pub fn append_received(&mut self, text: impl Into<String>) {
        self.push(ChatMessage::received(text));
    }

    /// Append a canned user/assistant pair in one step
    pub fn append_exchange(&mut self, sent: impl Into<String>, received: impl Into<String>) {
        self.push(ChatMessage::sent(sent));
        self.push(ChatMessage::received(received));
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.pending_replies > 0
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.scroll_to_bottom();
    }

    // ─────────────────────────────────────────────────────────
    // Input buffer
    // ─────────────────────────────────────────────────────────

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn insert_newline(&mut self) {
        self.input.push('\n');
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Take the input buffer if it holds more than whitespace
    pub fn take_input(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.input))
    }

    // ─────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    pub fn is_following(&self) -> bool {
        self.scroll_back == 0
    }

    pub fn scroll_up(&mut self, n: usize) {
        let max = self.messages.len().saturating_sub(1);
        self.scroll_back = (self.scroll_back + n).min(max);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(n);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_back = 0;
    }

    /// Messages up to the current scroll position
    pub fn visible_messages(&self) -> &[ChatMessage] {
        let end = self.messages.len().saturating_sub(self.scroll_back);
        &self.messages[..end]
    }
}
