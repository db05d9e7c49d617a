//! Monthly totals as a bar chart

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::BarChart,
    Frame,
};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
pub const MIN_BAR_WIDTH: u16 = 3;
pub const MAX_BAR_WIDTH: u16 = 9;

pub struct BarChartDemo {
    title: String,
    rng: StdRng,
    pub totals: [u64; 12],
    pub bar_width: u16,
}

impl BarChartDemo {
    pub fn new(title: String, seed: u64) -> Self {
        let mut demo = BarChartDemo {
            title,
            rng: StdRng::seed_from_u64(seed),
            totals: [0; 12],
            bar_width: 5,
        };
        demo.reshuffle();
        demo
    }

    pub fn reshuffle(&mut self) {
        for total in self.totals.iter_mut() {
            *total = self.rng.gen_range(20..=100);
        }
    }

    pub fn best_month(&self) -> &'static str {
        let mut best = 0;
        for (i, &t) in self.totals.iter().enumerate() {
            if t > self.totals[best] {
                best = i;
            }
        }
        MONTHS[best]
    }
}

impl Demo for BarChartDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let data: Vec<(&str, u64)> = MONTHS.iter().copied().zip(self.totals).collect();
        let heading = format!("{} · best: {}", self.title, self.best_month());
        let chart = BarChart::default()
            .block(panel(&heading, true))
            .data(data.as_slice())
            .bar_width(self.bar_width)
            .bar_gap(1)
            .bar_style(Style::default().fg(DEFAULT_THEME.primary))
            .value_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .label_style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(chart, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('r') => self.reshuffle(),
            KeyCode::Char('+') => self.bar_width = (self.bar_width + 1).min(MAX_BAR_WIDTH),
            KeyCode::Char('-') => self.bar_width = self.bar_width.saturating_sub(1).max(MIN_BAR_WIDTH),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("r", "reshuffle"), ("+/-", "bar width")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_in_range() {
        let mut demo = BarChartDemo::new("Bar".into(), 3);
        for _ in 0..20 {
            demo.reshuffle();
            assert!(demo.totals.iter().all(|t| (20..=100).contains(t)));
        }
    }

    #[test]
    fn test_best_month_picks_first_maximum() {
        let mut demo = BarChartDemo::new("Bar".into(), 3);
        demo.totals = [10; 12];
        demo.totals[4] = 90;
        demo.totals[9] = 90;
        assert_eq!(demo.best_month(), "May");
    }
}
