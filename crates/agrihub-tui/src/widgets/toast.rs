//! One-line toast notice drawn over the bottom of the page body

use agrihub_app::Toast;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct ToastBar<'a> {
    palette: &'a Palette,
    toast: &'a Toast,
}

impl<'a> ToastBar<'a> {
    pub fn new(palette: &'a Palette, toast: &'a Toast) -> Self {
        Self { palette, toast }
    }
}

impl Widget for ToastBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paragraph::new(format!(" {} ", self.toast.text))
            .alignment(Alignment::Center)
            .style(styles::toast(self.palette, self.toast.kind))
            .render(area, buf);
    }
}
