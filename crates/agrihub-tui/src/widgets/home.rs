//! Home page: weather card and quick actions

use agrihub_app::weather::WeatherSimulator;
use agrihub_app::QuickAction;
use agrihub_core::Condition;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct HomeView<'a> {
    palette: &'a Palette,
    weather: &'a WeatherSimulator,
    scroll: u16,
}

impl<'a> HomeView<'a> {
    pub fn new(palette: &'a Palette, weather: &'a WeatherSimulator) -> Self {
        Self {
            palette,
            weather,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    fn weather_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let reading = self.weather.reading();

        let status = if self.weather.is_refreshing() {
            Span::styled("Refreshing...", styles::keybinding(p))
        } else {
            Span::styled(
                format!("Updated {}", self.weather.updated_at().format("%H:%M")),
                styles::text_muted(p),
            )
        };

        vec![
            Line::from(vec![
                Span::styled(
                    format!("{} {}°C", condition_glyph(reading.condition), reading.temperature_c),
                    styles::heading(p),
                ),
                Span::raw("  "),
                Span::styled(reading.condition.label(), styles::text_secondary(p)),
            ]),
            Line::from(vec![
                Span::styled("Humidity ", styles::text_muted(p)),
                Span::styled(format!("{}%", reading.humidity_pct), styles::text_primary(p)),
                Span::styled("   Wind ", styles::text_muted(p)),
                Span::styled(format!("{} km/h", reading.wind_kmh), styles::text_primary(p)),
                Span::styled("   Rain ", styles::text_muted(p)),
                Span::styled(format!("{}%", reading.rain_pct), styles::text_primary(p)),
            ]),
            Line::from(vec![
                status,
                Span::styled("   [", styles::text_muted(p)),
                Span::styled("r", styles::keybinding(p)),
                Span::styled("] Refresh", styles::text_muted(p)),
            ]),
        ]
    }

    fn action_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        QuickAction::ALL
            .chunks(2)
            .map(|pair| {
                let mut spans = Vec::new();
                for action in pair {
                    spans.push(Span::styled("[", styles::text_muted(p)));
                    spans.push(Span::styled(action.key().to_string(), styles::keybinding(p)));
                    spans.push(Span::styled("] ", styles::text_muted(p)));
                    spans.push(Span::styled(
                        format!("{:<18}", action.label()),
                        styles::text_primary(p),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    }
}

fn condition_glyph(condition: Condition) -> &'static str {
    match condition {
        Condition::Sun => "☀",
        Condition::Cloud => "☁",
        Condition::CloudSun => "⛅",
        Condition::CloudRain => "☔",
    }
}

impl Widget for HomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [weather_area, actions_area] =
            Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

        Paragraph::new(self.weather_lines())
            .block(styles::titled_block(p, "Weather", false))
            .scroll((self.scroll, 0))
            .render(weather_area, buf);

        Paragraph::new(self.action_lines())
            .block(styles::titled_block(p, "Quick Actions", true))
            .scroll((self.scroll, 0))
            .render(actions_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn simulator() -> WeatherSimulator {
        WeatherSimulator::new(&mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_home_shows_weather_reading() {
        let weather = simulator();
        let reading = *weather.reading();
        let mut term = TestTerminal::new();
        term.render_widget(HomeView::new(&LIGHT, &weather), term.area());

        assert!(term.buffer_contains(&format!("{}°C", reading.temperature_c)));
        assert!(term.buffer_contains(&format!("{} km/h", reading.wind_kmh)));
        assert!(term.buffer_contains(reading.condition.label()));
    }

    #[test]
    fn test_home_lists_quick_actions() {
        let weather = simulator();
        let mut term = TestTerminal::new();
        term.render_widget(HomeView::new(&LIGHT, &weather), term.area());

        for action in QuickAction::ALL {
            assert!(term.buffer_contains(action.label()), "missing {}", action.label());
        }
    }

    #[test]
    fn test_home_shows_refreshing() {
        let mut weather = simulator();
        weather.begin_refresh();
        let mut term = TestTerminal::new();
        term.render_widget(HomeView::new(&LIGHT, &weather), term.area());
        assert!(term.buffer_contains("Refreshing..."));
    }
}
