//! Chat page: transcript with sent messages right-aligned, plus the input box

use agrihub_app::chat::ChatSession;
use agrihub_core::{ChatMessage, Direction, QUICK_REPLIES};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{styles, Palette};

/// Bubbles take at most this share of the transcript width
const BUBBLE_WIDTH_PERCENT: usize = 75;

const INPUT_HEIGHT: u16 = 5;

pub struct ChatView<'a> {
    palette: &'a Palette,
    session: &'a ChatSession,
}

impl<'a> ChatView<'a> {
    pub fn new(palette: &'a Palette, session: &'a ChatSession) -> Self {
        Self { palette, session }
    }

    /// Transcript lines for the visible messages, oldest first
    fn transcript_lines(&self, width: u16) -> Vec<Line<'static>> {
        let p = self.palette;
        let bubble_width = (usize::from(width) * BUBBLE_WIDTH_PERCENT / 100).max(8);
        let mut lines = Vec::new();

        for message in self.session.visible_messages() {
            lines.extend(bubble_lines(p, message, bubble_width, usize::from(width)));
            lines.push(Line::default());
        }

        if self.session.is_awaiting_reply() && self.session.is_following() {
            lines.push(Line::from(Span::styled(
                " Assistant is typing...",
                styles::text_muted(p),
            )));
        }

        lines
    }
}

fn bubble_lines(
    p: &Palette,
    message: &ChatMessage,
    bubble_width: usize,
    total_width: usize,
) -> Vec<Line<'static>> {
    let (style, sent) = match message.direction {
        Direction::Sent => (Style::default().fg(p.text_primary).bg(p.sent_bg), true),
        Direction::Received => (Style::default().fg(p.text_primary).bg(p.received_bg), false),
    };

    let mut body = wrap_text(&message.text, bubble_width.saturating_sub(2));
    body.push(message.time_label());
    let inner = body.iter().map(|l| l.width()).max().unwrap_or(0);

    body.into_iter()
        .map(|text| {
            let fill = inner.saturating_sub(text.width());
            let padded = format!(" {}{} ", text, " ".repeat(fill));
            if sent {
                let pad = total_width.saturating_sub(padded.width());
                Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(padded, style)])
            } else {
                Line::from(Span::styled(padded, style))
            }
        })
        .collect()
}

/// Quick-reply chips, bound to F6 onwards
fn chip_line(p: &Palette) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, text) in QUICK_REPLIES.iter().enumerate() {
        spans.push(Span::styled(format!("[F{}]", i + 6), styles::keybinding(p)));
        spans.push(Span::styled(format!(" {}  ", text), styles::text_secondary(p)));
    }
    Line::from(spans)
}

/// Greedy word wrap by display width; hard newlines are kept and overlong
/// words are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split(' ') {
            let sep = usize::from(!line.is_empty());
            if line.width() + sep + word.width() <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                continue;
            }

            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            for c in word.chars() {
                if line.width() + c.width().unwrap_or(0) > width {
                    out.push(std::mem::take(&mut line));
                }
                line.push(c);
            }
        }
        out.push(line);
    }

    out
}

impl Widget for ChatView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [transcript_area, chips_area, input_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .areas(area);

        let title = if self.session.is_following() {
            "Farming Assistant".to_string()
        } else {
            format!("Farming Assistant ({} newer)", self.session.scroll_back())
        };
        let block = styles::titled_block(p, &title, false);
        let inner = block.inner(transcript_area);
        block.render(transcript_area, buf);

        // Bottom-anchored: skip whatever does not fit above the newest line
        let lines = self.transcript_lines(inner.width);
        let skip = lines.len().saturating_sub(inner.height as usize);
        Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>()).render(inner, buf);

        Paragraph::new(chip_line(p)).render(chips_area, buf);

        let mut input = Vec::new();
        for (i, row) in self.session.input().split('\n').enumerate() {
            let prompt = if i == 0 { "> " } else { "  " };
            input.push(Line::from(vec![
                Span::styled(prompt, styles::accent(p)),
                Span::styled(row.to_string(), styles::text_primary(p)),
            ]));
        }
        if let Some(last) = input.last_mut() {
            last.push_span(Span::styled("▏", styles::accent(p)));
        }

        Paragraph::new(input)
            .wrap(Wrap { trim: false })
            .block(
                styles::titled_block(p, "Message", true)
                    .title_bottom(" Enter send · Shift+Enter newline · Esc home "),
            )
            .render(input_area, buf);
    }
}
