//! Header bar widget
//!
//! Shows the app title with the active page on the left and a part-of-day
//! greeting plus clock on the right.

use agrihub_core::{time_greeting, Page, UserProfile};
use chrono::{DateTime, Local, Timelike};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

pub struct MainHeader<'a> {
    palette: &'a Palette,
    page: Page,
    profile: &'a UserProfile,
    now: DateTime<Local>,
}

impl<'a> MainHeader<'a> {
    pub fn new(palette: &'a Palette, page: Page, profile: &'a UserProfile) -> Self {
        Self {
            palette,
            page,
            profile,
            now: Local::now(),
        }
    }

    /// Render for a fixed point in time
    pub fn at(mut self, now: DateTime<Local>) -> Self {
        self.now = now;
        self
    }

    fn greeting(&self) -> String {
        format!(
            "Good {}, {}",
            time_greeting(self.now.hour()),
            self.profile.first_name()
        )
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("AgriHub", styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled("/", styles::text_muted(p)),
            Span::raw(" "),
            Span::styled(self.page.title(), styles::text_secondary(p)),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        let right = Line::from(vec![
            Span::styled(self.greeting(), styles::text_primary(p)),
            Span::raw("  "),
            Span::styled(self.now.format("%H:%M").to_string(), styles::accent(p)),
            Span::raw(" "),
        ]);
        let right_width = right.width() as u16;

        // Drop the right section when it would overlap the title
        if left_width + right_width + 2 <= inner.width {
            let x = inner.x + inner.width - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use agrihub_core::PROFILE;
    use chrono::TimeZone;

    fn at_hour(hour: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 14, hour, 5, 0)
            .single()
            .unwrap()
    }

    #[test]
    fn test_header_shows_title_page_and_clock() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new(&LIGHT, Page::Advisory, &PROFILE).at(at_hour(9));
        term.render_widget(header, Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("AgriHub"));
        assert!(term.buffer_contains("Advisory"));
        assert!(term.buffer_contains("Good Morning, David"));
        assert!(term.buffer_contains("09:05"));
    }

    #[test]
    fn test_header_greeting_follows_hour() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new(&LIGHT, Page::Home, &PROFILE).at(at_hour(19));
        term.render_widget(header, Rect::new(0, 0, 80, 3));
        assert!(term.buffer_contains("Good Evening, David"));
    }

    #[test]
    fn test_header_narrow_keeps_title() {
        let mut term = TestTerminal::compact();
        let header = MainHeader::new(&LIGHT, Page::Profile, &PROFILE).at(at_hour(14));
        term.render_widget(header, Rect::new(0, 0, 30, 3));
        assert!(term.buffer_contains("AgriHub"));
        assert!(!term.buffer_contains("Afternoon"));
    }
}
