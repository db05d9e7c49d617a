//! Tick-driven stopwatch with laps
//!
//! Elapsed time is counted in ticks rather than read from the wall clock, so
//! the display only advances while the screen is visible.

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use std::time::Duration;

pub const MAX_LAPS: usize = 99;

pub struct StopwatchDemo {
    title: String,
    tick_rate: Duration,
    pub running: bool,
    pub ticks: u64,
    pub laps: Vec<Duration>,
}

/// mm:ss.cc
pub fn format_elapsed(elapsed: Duration) -> String {
    let centis = elapsed.as_millis() / 10;
    format!(
        "{:02}:{:02}.{:02}",
        centis / 6000,
        (centis / 100) % 60,
        centis % 100
    )
}

impl StopwatchDemo {
    pub fn new(title: String, tick_rate: Duration) -> Self {
        StopwatchDemo {
            title,
            tick_rate,
            running: false,
            ticks: 0,
            laps: Vec::new(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.tick_rate.saturating_mul(self.ticks.min(u32::MAX as u64) as u32)
    }

    pub fn lap(&mut self) {
        if self.running && self.laps.len() < MAX_LAPS {
            self.laps.push(self.elapsed());
        }
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.ticks = 0;
        self.laps.clear();
    }
}

impl Demo for StopwatchDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel(&self.title, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        let color = if self.running {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.fg
        };
        frame.render_widget(
            Paragraph::new(vec![
                Line::raw(""),
                Line::styled(
                    format_elapsed(self.elapsed()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
            .alignment(Alignment::Center),
            rows[0],
        );

        // Newest lap first
        let items: Vec<ListItem> = self
            .laps
            .iter()
            .enumerate()
            .rev()
            .map(|(i, lap)| {
                let split = match i {
                    0 => *lap,
                    _ => lap.saturating_sub(self.laps[i - 1]),
                };
                ListItem::new(format!(
                    "Lap {:>2}   {}   +{}",
                    i + 1,
                    format_elapsed(*lap),
                    format_elapsed(split)
                ))
                .style(Style::default().fg(DEFAULT_THEME.muted))
            })
            .collect();
        frame.render_widget(List::new(items), rows[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(' ') => self.running = !self.running,
            KeyCode::Char('l') => self.lap(),
            KeyCode::Char('r') => self.reset(),
            _ => return false,
        }
        true
    }

    fn on_tick(&mut self) {
        if self.running {
            self.ticks += 1;
        }
    }

    fn hints(&self) -> &'static [Hint] {
        &[("⎵", "start/stop"), ("l", "lap"), ("r", "reset")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00.00");
        assert_eq!(format_elapsed(Duration::from_millis(61_250)), "01:01.25");
    }

    #[test]
    fn test_only_counts_while_running() {
        let mut demo = StopwatchDemo::new("Stopwatch".into(), Duration::from_millis(250));
        demo.on_tick();
        assert_eq!(demo.ticks, 0);
        demo.running = true;
        for _ in 0..4 {
            demo.on_tick();
        }
        assert_eq!(demo.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn test_laps_require_running() {
        let mut demo = StopwatchDemo::new("Stopwatch".into(), Duration::from_millis(100));
        demo.lap();
        assert!(demo.laps.is_empty());
        demo.running = true;
        demo.on_tick();
        demo.lap();
        demo.on_tick();
        demo.lap();
        assert_eq!(
            demo.laps,
            vec![Duration::from_millis(100), Duration::from_millis(200)]
        );
        demo.reset();
        assert!(demo.laps.is_empty());
        assert!(!demo.running);
    }
}
