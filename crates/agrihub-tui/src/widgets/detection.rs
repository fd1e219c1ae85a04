//! Disease detection page

use agrihub_app::detection::DetectionFlow;
use agrihub_core::DetectionState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Palette};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct DetectionView<'a> {
    palette: &'a Palette,
    flow: &'a DetectionFlow,
    frame: usize,
    scroll: u16,
}

impl<'a> DetectionView<'a> {
    pub fn new(palette: &'a Palette, flow: &'a DetectionFlow) -> Self {
        Self {
            palette,
            flow,
            frame: 0,
            scroll: 0,
        }
    }

    /// Animation frame for the analyzing spinner
    pub fn frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    fn hint(&self, keys: &[(&'static str, &'static str)]) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::new();
        for (key, label) in keys {
            spans.push(Span::styled("[", styles::text_muted(p)));
            spans.push(Span::styled(*key, styles::keybinding(p)));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted(p)));
        }
        Line::from(spans)
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let image = self
            .flow
            .image()
            .map(|image| image.describe())
            .unwrap_or_default();

        match self.flow.state() {
            DetectionState::Idle => vec![
                Line::from(Span::styled("Scan a plant for disease", styles::heading(p))),
                Line::from(Span::styled(
                    "Upload a photo of an affected leaf or take one with the camera.",
                    styles::text_secondary(p),
                )),
                Line::default(),
                self.hint(&[("u", "Upload photo"), ("c", "Take photo")]),
            ],
            DetectionState::Previewing => vec![
                Line::from(Span::styled("Preview", styles::heading(p))),
                Line::from(Span::styled(image, styles::text_secondary(p))),
                Line::default(),
                self.hint(&[("a", "Analyze"), ("r", "Retake")]),
            ],
            DetectionState::Analyzing => {
                let spinner = SPINNER[self.frame % SPINNER.len()];
                vec![
                    Line::from(Span::styled(image, styles::text_secondary(p))),
                    Line::default(),
                    Line::from(vec![
                        Span::styled(spinner, styles::accent_bold(p)),
                        Span::raw(" "),
                        Span::styled("Analyzing image...", styles::text_primary(p)),
                    ]),
                    Line::default(),
                    self.hint(&[("r", "Cancel")]),
                ]
            }
            DetectionState::ResultReady => self.report_lines(),
        }
    }

    fn report_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let Some(report) = self.flow.report() else {
            return Vec::new();
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(report.diagnosis, styles::heading(p)),
                Span::raw("  "),
                Span::styled(
                    format!("{}% confidence", report.confidence_pct),
                    styles::keybinding(p),
                ),
            ]),
            Line::from(Span::styled(report.description, styles::text_secondary(p))),
            Line::default(),
            Line::from(Span::styled("Recommendations", styles::accent_bold(p))),
        ];
        lines.extend(report.recommendations.iter().map(|item| {
            Line::from(vec![
                Span::styled(" • ", styles::accent(p)),
                Span::styled(*item, styles::text_primary(p)),
            ])
        }));
        lines.push(Line::default());
        lines.push(self.hint(&[("r", "New scan")]));
        lines
    }
}

impl Widget for DetectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let prompt_height = if self.flow.is_entering_path() { 3 } else { 0 };
        let [body_area, prompt_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(prompt_height)]).areas(area);

        let title = format!("Disease Detection · {}", self.flow.state().label());
        Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(styles::titled_block(p, &title, false))
            .render(body_area, buf);

        if let Some(path) = self.flow.path_input() {
            Paragraph::new(Line::from(vec![
                Span::styled("> ", styles::accent(p)),
                Span::styled(path.to_string(), styles::text_primary(p)),
                Span::styled("▏", styles::accent(p)),
            ]))
            .block(
                styles::titled_block(p, "Image path", true)
                    .title_bottom(" Enter load · Esc cancel "),
            )
            .render(prompt_area, buf);
        }
    }
}
