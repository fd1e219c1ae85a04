//! Bottom navigation bar with one item per page

use agrihub_core::Page;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct NavBar<'a> {
    palette: &'a Palette,
    active: Page,
}

impl<'a> NavBar<'a> {
    pub fn new(palette: &'a Palette, active: Page) -> Self {
        Self { palette, active }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let cells = Layout::horizontal([Constraint::Ratio(1, Page::ALL.len() as u32); 5])
            .split(Rect::new(inner.x, inner.y, inner.width, 1));

        for (page, cell) in Page::ALL.iter().zip(cells.iter()) {
            let label = format!("{} {}", page.index() + 1, page.title());
            let style = if *page == self.active {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            Paragraph::new(Line::from(label))
                .style(style)
                .alignment(Alignment::Center)
                .render(*cell, buf);
        }
    }
}
