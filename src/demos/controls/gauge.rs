//! Simulated per-core CPU load rendered as gauges

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Gauge,
    Frame,
};

pub const CORES: usize = 4;
/// Largest change in load per tick, in percentage points
const MAX_DRIFT: f64 = 12.0;

pub struct GaugeDemo {
    title: String,
    rng: StdRng,
    /// Load per core, 0.0..=100.0
    pub loads: [f64; CORES],
    /// Added to every core, simulating a background job
    pub stress: bool,
}

impl GaugeDemo {
    pub fn new(title: String, seed: u64) -> Self {
        GaugeDemo {
            title,
            rng: StdRng::seed_from_u64(seed),
            loads: [18.0, 32.0, 9.0, 45.0],
            stress: false,
        }
    }

    pub fn average(&self) -> f64 {
        self.loads.iter().sum::<f64>() / CORES as f64
    }
}

impl Demo for GaugeDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let heading = format!("{} · avg {:.0}%", self.title, self.average());
        let block = panel(&heading, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(2); CORES];
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (i, load) in self.loads.iter().enumerate() {
            let ratio = (load / 100.0).clamp(0.0, 1.0);
            let gauge = Gauge::default()
                .gauge_style(
                    Style::default()
                        .fg(DEFAULT_THEME.load_color(ratio))
                        .bg(DEFAULT_THEME.highlight_bg),
                )
                .ratio(ratio)
                .label(format!("CPU{} {:>3.0}%", i, load));
            frame.render_widget(gauge, rows[i]);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('s') => self.stress = !self.stress,
            _ => return false,
        }
        true
    }

    fn on_tick(&mut self) {
        let floor = if self.stress { 70.0 } else { 0.0 };
        for load in self.loads.iter_mut() {
            let drift = self.rng.gen_range(-MAX_DRIFT..=MAX_DRIFT);
            *load = (*load + drift).clamp(floor, 100.0);
        }
    }

    fn hints(&self) -> &'static [Hint] {
        &[("s", "stress")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_stay_in_range() {
        let mut demo = GaugeDemo::new("Gauge".into(), 1);
        for _ in 0..500 {
            demo.on_tick();
            assert!(demo.loads.iter().all(|l| (0.0..=100.0).contains(l)));
        }
    }

    #[test]
    fn test_stress_raises_floor() {
        let mut demo = GaugeDemo::new("Gauge".into(), 2);
        demo.stress = true;
        demo.on_tick();
        assert!(demo.loads.iter().all(|&l| l >= 70.0));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GaugeDemo::new("Gauge".into(), 42);
        let mut b = GaugeDemo::new("Gauge".into(), 42);
        for _ in 0..10 {
            a.on_tick();
            b.on_tick();
        }
        assert_eq!(a.loads, b.loads);
    }
}
