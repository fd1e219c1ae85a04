//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows used by the bordered header and nav bar
pub const HEADER_HEIGHT: u16 = 3;
pub const NAV_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, greeting and clock
    pub header: Rect,

    /// Active page
    pub body: Rect,

    /// Bottom navigation bar
    pub nav: Rect,
}

/// Split the terminal into header, page body and nav bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(NAV_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        nav: chunks[2],
    }
}

/// One-line strip above the nav bar where toasts are drawn
pub fn toast_area(areas: &ScreenAreas) -> Rect {
    let body = areas.body;
    Rect::new(
        body.x + 1,
        body.y + body.height.saturating_sub(1),
        body.width.saturating_sub(2),
        body.height.min(1),
    )
}
