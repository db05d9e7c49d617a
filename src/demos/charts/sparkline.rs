//! Network throughput history as sparklines

use crate::demos::{panel, Demo, DemoContext};
use crate::ui::theme::DEFAULT_THEME;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Sparkline,
    Frame,
};
use std::collections::VecDeque;

pub struct SparklineDemo {
    title: String,
    rng: StdRng,
    capacity: usize,
    pub download: VecDeque<u64>,
    pub upload: VecDeque<u64>,
}

impl SparklineDemo {
    pub fn new(title: String, ctx: &DemoContext) -> Self {
        let capacity = ctx.chart_window.max(1);
        let mut demo = SparklineDemo {
            title,
            rng: StdRng::seed_from_u64(ctx.seed),
            capacity,
            download: VecDeque::with_capacity(capacity),
            upload: VecDeque::with_capacity(capacity),
        };
        for _ in 0..capacity {
            demo.sample();
        }
        demo
    }

    fn push(history: &mut VecDeque<u64>, capacity: usize, value: u64) {
        if history.len() == capacity {
            history.pop_front();
        }
        history.push_back(value);
    }

    fn sample(&mut self) {
        let down = self.rng.gen_range(200..=900);
        let up = self.rng.gen_range(20..=250);
        Self::push(&mut self.download, self.capacity, down);
        Self::push(&mut self.upload, self.capacity, up);
    }

    /// The newest `width` samples, so the line scrolls from the right
    fn visible(history: &VecDeque<u64>, width: u16) -> Vec<u64> {
        let skip = history.len().saturating_sub(width as usize);
        history.iter().skip(skip).copied().collect()
    }
}

impl Demo for SparklineDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let width = area.width.saturating_sub(2);
        let down = Self::visible(&self.download, width);
        let up = Self::visible(&self.upload, width);

        let current_down = self.download.back().copied().unwrap_or(0);
        let current_up = self.upload.back().copied().unwrap_or(0);

        frame.render_widget(
            Sparkline::default()
                .block(panel(&format!("{} · ↓ {} KB/s", self.title, current_down), true))
                .data(&down)
                .style(Style::default().fg(DEFAULT_THEME.teal)),
            rows[0],
        );
        frame.render_widget(
            Sparkline::default()
                .block(panel(&format!("↑ {} KB/s", current_up), false))
                .data(&up)
                .style(Style::default().fg(DEFAULT_THEME.accent)),
            rows[1],
        );
    }

    fn on_tick(&mut self) {
        self.sample();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_bounded_by_window() {
        let ctx = DemoContext {
            chart_window: 5,
            ..DemoContext::default()
        };
        let mut demo = SparklineDemo::new("Sparkline".into(), &ctx);
        for _ in 0..20 {
            demo.on_tick();
        }
        assert_eq!(demo.download.len(), 5);
        assert_eq!(demo.upload.len(), 5);
    }

    #[test]
    fn test_visible_takes_newest() {
        let history: VecDeque<u64> = (1..=6).collect();
        assert_eq!(SparklineDemo::visible(&history, 3), vec![4, 5, 6]);
        assert_eq!(SparklineDemo::visible(&history, 10).len(), 6);
    }
}
