//! Advisory page: tabbed topic list and topic detail

use agrihub_app::advisory::AdvisoryState;
use agrihub_core::{AdvisoryTab, AdvisoryTopic};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Palette};

pub struct AdvisoryView<'a> {
    palette: &'a Palette,
    state: &'a AdvisoryState,
}

impl<'a> AdvisoryView<'a> {
    pub fn new(palette: &'a Palette, state: &'a AdvisoryState) -> Self {
        Self { palette, state }
    }

    fn tab_line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for tab in AdvisoryTab::ALL {
            let style = if tab == self.state.tab() {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(format!(" {} ", tab.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let selected = self.state.selected_index();
        let lines: Vec<Line> = self
            .state
            .topics()
            .into_iter()
            .enumerate()
            .map(|(i, topic)| {
                if i == selected {
                    Line::from(Span::styled(
                        format!(" ▸ {} ", topic.title),
                        styles::focused_selected(p),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("   {}", topic.title),
                        styles::text_primary(p),
                    ))
                }
            })
            .collect();

        Paragraph::new(lines)
            .block(
                styles::titled_block(p, "Topics", true)
                    .title_bottom(" ←→ tab · ↑↓ select · Enter open · c ask "),
            )
            .render(area, buf);
    }

    fn render_detail(&self, topic: &AdvisoryTopic, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let lines = vec![
            Line::from(Span::styled(topic.content, styles::text_primary(p))),
            Line::default(),
            Line::from(vec![
                Span::styled("[", styles::text_muted(p)),
                Span::styled("c", styles::keybinding(p)),
                Span::styled("] Ask the assistant  [", styles::text_muted(p)),
                Span::styled("Esc", styles::keybinding(p)),
                Span::styled("] Back", styles::text_muted(p)),
            ]),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(styles::titled_block(p, topic.title, true))
            .render(area, buf);
    }
}

impl Widget for AdvisoryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [tabs_area, content_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        Paragraph::new(self.tab_line()).render(tabs_area, buf);

        match self.state.open_topic() {
            Some(topic) => self.render_detail(topic, content_area, buf),
            None => self.render_list(content_area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_list_shows_guides_by_default() {
        let state = AdvisoryState::new();
        let mut term = TestTerminal::new();
        term.render_widget(AdvisoryView::new(&DARK, &state), term.area());

        assert!(term.buffer_contains("▸ Pest Control"));
        assert!(term.buffer_contains("Fertilization"));
        assert!(!term.buffer_contains("Drought Preparation"));
    }

    #[test]
    fn test_seasonal_tab_lists_seasonal_topics() {
        let mut state = AdvisoryState::new();
        state.switch_tab();
        let mut term = TestTerminal::new();
        term.render_widget(AdvisoryView::new(&DARK, &state), term.area());
        assert!(term.buffer_contains("Drought Preparation"));
    }

    #[test]
    fn test_open_topic_shows_content() {
        let mut state = AdvisoryState::new();
        state.open("drought").unwrap();
        let topic = state.open_topic().unwrap();
        let first_words: String = topic.content.split(' ').take(3).collect::<Vec<_>>().join(" ");

        let mut term = TestTerminal::new();
        term.render_widget(AdvisoryView::new(&DARK, &state), term.area());
        assert!(term.buffer_contains("Drought Preparation"));
        assert!(term.buffer_contains(&first_words));
        assert!(term.buffer_contains("Ask the assistant"));
    }
}
