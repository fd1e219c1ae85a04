//! Main render/view function (View in TEA pattern)


use agrihub_app::AppState;
use agrihub_core::Page;
use chrono::{DateTime, Local};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Spinner advances once per this many milliseconds
const SPINNER_STEP_MS: i64 = 100;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    view_at(frame, state, Local::now());
}

/// Render as of `now`; the clock and spinner are derived from it
pub fn view_at(frame: &mut Frame, state: &AppState, now: DateTime<Local>) {
    let area = frame.area();
    let p = palette::for_mode(state.dark_mode);

    frame.render_widget(Block::default().style(Style::default().bg(p.background)), area);

    let areas = layout::create(area);
    let page = state.page();

    frame.render_widget(
        widgets::MainHeader::new(p, page, state.profile.profile()).at(now),
        areas.header,
    );

    let scroll = state.router.scroll_offset();
    match page {
        Page::Home => frame.render_widget(
            widgets::HomeView::new(p, &state.weather).scroll(scroll),
            areas.body,
        ),
        Page::Chat => frame.render_widget(widgets::ChatView::new(p, &state.chat), areas.body),
        Page::Detection => {
            let spin = (now.timestamp_millis() / SPINNER_STEP_MS) as usize;
            frame.render_widget(
                widgets::DetectionView::new(p, &state.detection)
                    .frame(spin)
                    .scroll(scroll),
                areas.body,
            )
        }
        Page::Advisory => {
            frame.render_widget(widgets::AdvisoryView::new(p, &state.advisory), areas.body)
        }
        Page::Profile => frame.render_widget(
            widgets::ProfileView::new(p, &state.profile, state.dark_mode).scroll(scroll),
            areas.body,
        ),
    }

    frame.render_widget(widgets::NavBar::new(p, page), areas.nav);

    if let Some(toast) = state.toasts.current() {
        frame.render_widget(
            widgets::ToastBar::new(p, toast),
            layout::toast_area(&areas),
        );
    }
}
