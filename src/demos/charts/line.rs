//! Streaming stock ticker

use super::series::Series;
use crate::demos::{panel, Demo, DemoContext, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType},
    Frame,
};

const START_PRICE: f64 = 100.0;
/// Largest relative move per tick
const VOLATILITY: f64 = 0.02;

pub struct LineChartDemo {
    title: String,
    rng: StdRng,
    pub series: Series,
    pub paused: bool,
    tick: u64,
}

impl LineChartDemo {
    pub fn new(title: String, ctx: &DemoContext) -> Self {
        let mut demo = LineChartDemo {
            title,
            rng: StdRng::seed_from_u64(ctx.seed),
            series: Series::new(ctx.chart_window),
            paused: false,
            tick: 0,
        };
        // Pre-fill half the window so the chart isn't empty on open
        for _ in 0..ctx.chart_window / 2 {
            demo.advance();
        }
        demo
    }

    pub fn price(&self) -> f64 {
        self.series.last().map(|(_, y)| y).unwrap_or(START_PRICE)
    }

    fn advance(&mut self) {
        let change = self.rng.gen_range(-VOLATILITY..=VOLATILITY);
        let next = (self.price() * (1.0 + change)).max(1.0);
        self.series.push(self.tick as f64, next);
        self.tick += 1;
    }
}

impl Demo for LineChartDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let plot_width = area.width.saturating_sub(10).max(1) as usize;
        let data = self.series.downsample(plot_width);
        let [x_min, x_max] = self.series.x_bounds();
        let [y_min, y_max] = self.series.y_bounds(0.1);

        let first = self.series.points().first().map(|&(_, y)| y).unwrap_or(START_PRICE);
        let color = if self.price() >= first {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.error
        };

        let dataset = Dataset::default()
            .name("ACME")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&data);

        let heading = format!(
            "{} · ACME {:.2}{}",
            self.title,
            self.price(),
            if self.paused { " · paused" } else { "" }
        );
        let chart = Chart::new(vec![dataset])
            .block(panel(&heading, true))
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(DEFAULT_THEME.muted))
                    .bounds([x_min, x_max])
                    .labels(vec![
                        Span::raw(format!("t{:.0}", x_min)),
                        Span::raw(format!("t{:.0}", x_max)),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(DEFAULT_THEME.muted))
                    .bounds([y_min, y_max])
                    .labels(vec![
                        Span::raw(format!("{:.0}", y_min)),
                        Span::raw(format!("{:.0}", y_max)),
                    ]),
            );
        frame.render_widget(chart, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(' ') => self.paused = !self.paused,
            _ => return false,
        }
        true
    }

    fn on_tick(&mut self) {
        if !self.paused {
            self.advance();
        }
    }

    fn hints(&self) -> &'static [Hint] {
        &[("⎵", "pause")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_never_exceeds_capacity() {
        let ctx = DemoContext {
            chart_window: 20,
            ..DemoContext::default()
        };
        let mut demo = LineChartDemo::new("Line".into(), &ctx);
        assert_eq!(demo.series.len(), 10);
        for _ in 0..100 {
            demo.on_tick();
        }
        assert_eq!(demo.series.len(), 20);
        assert!(demo.price() >= 1.0);
    }

    #[test]
    fn test_paused_ticker_holds() {
        let mut demo = LineChartDemo::new("Line".into(), &DemoContext::default());
        demo.paused = true;
        let before = demo.series.points();
        demo.on_tick();
        assert_eq!(demo.series.points(), before);
    }
}
