//! Profile page: farmer details, crop health and the dark mode switch

use agrihub_core::ProfileStore;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

/// Width of the label column in the details card
const LABEL_WIDTH: usize = 16;

pub struct ProfileView<'a> {
    palette: &'a Palette,
    store: &'a ProfileStore,
    dark_mode: bool,
    scroll: u16,
}

impl<'a> ProfileView<'a> {
    pub fn new(palette: &'a Palette, store: &'a ProfileStore, dark_mode: bool) -> Self {
        Self {
            palette,
            store,
            dark_mode,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    fn detail_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let profile = self.store.profile();

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", profile.initials()), styles::focused_selected(p)),
                Span::raw("  "),
                Span::styled(profile.name, styles::heading(p)),
                Span::raw("  "),
                Span::styled(profile.location, styles::text_muted(p)),
            ]),
            Line::default(),
        ];

        lines.extend(profile.fields().map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", label, width = LABEL_WIDTH),
                    styles::text_muted(p),
                ),
                Span::styled(value, styles::text_primary(p)),
            ])
        }));

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", "Dark Mode", width = LABEL_WIDTH),
                styles::text_muted(p),
            ),
            Span::styled(
                if self.dark_mode { "On" } else { "Off" },
                styles::accent_bold(p),
            ),
            Span::styled("   [", styles::text_muted(p)),
            Span::styled("t", styles::keybinding(p)),
            Span::styled("] Toggle", styles::text_muted(p)),
        ]));
        lines
    }

    fn crop_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        self.store
            .crops()
            .iter()
            .flat_map(|crop| {
                [
                    Line::from(vec![
                        Span::styled(crop.name, styles::heading(p)),
                        Span::raw("  "),
                        Span::styled(crop.status.label(), styles::crop_status(p, crop.status)),
                    ]),
                    Line::from(Span::styled(crop.summary(), styles::text_secondary(p))),
                    Line::default(),
                ]
            })
            .collect()
    }
}

impl Widget for ProfileView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [details_area, crops_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);

        Paragraph::new(self.detail_lines())
            .scroll((self.scroll, 0))
            .block(styles::titled_block(p, "Profile", false))
            .render(details_area, buf);

        Paragraph::new(self.crop_lines())
            .scroll((self.scroll, 0))
            .block(styles::titled_block(p, "Crop Health", false))
            .render(crops_area, buf);
    }
}
