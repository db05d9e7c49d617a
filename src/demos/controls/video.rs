//! Simulated video playback with seeking

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
    Frame,
};
use std::time::Duration;

pub const CLIP_LENGTH: Duration = Duration::from_secs(3 * 60 + 12);
pub const SEEK_STEP: Duration = Duration::from_secs(10);

/// Formats a duration as `m:ss`
pub fn format_timestamp(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub struct VideoPlayerDemo {
    title: String,
    tick_rate: Duration,
    pub position: Duration,
    pub playing: bool,
    pub muted: bool,
}

impl VideoPlayerDemo {
    pub fn new(title: String, tick_rate: Duration) -> Self {
        VideoPlayerDemo {
            title,
            tick_rate,
            position: Duration::ZERO,
            playing: false,
            muted: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.position >= CLIP_LENGTH
    }

    pub fn toggle_play(&mut self) {
        if self.is_finished() {
            // Replay from the start
            self.position = Duration::ZERO;
            self.playing = true;
        } else {
            self.playing = !self.playing;
        }
    }

    pub fn seek_forward(&mut self) {
        self.position = (self.position + SEEK_STEP).min(CLIP_LENGTH);
    }

    pub fn seek_back(&mut self) {
        self.position = self.position.saturating_sub(SEEK_STEP);
    }

    fn frame_art(&self) -> Vec<Line<'static>> {
        // A tiny "scene": a ball bouncing across the frame
        const WIDTH: usize = 24;
        let t = self.position.as_secs() as usize;
        let x = t % (2 * WIDTH);
        let x = if x >= WIDTH { 2 * WIDTH - 1 - x } else { x };
        let mut row = vec![' '; WIDTH];
        row[x] = '●';
        let ground: String = "▔".repeat(WIDTH);
        vec![
            Line::raw(""),
            Line::raw(row.into_iter().collect::<String>()),
            Line::styled(ground, Style::default().fg(DEFAULT_THEME.muted)),
        ]
    }
}

impl Demo for VideoPlayerDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel(&self.title, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let mut screen = self.frame_art();
        if !self.playing {
            let label = if self.is_finished() { "↻ replay" } else { "▶ paused" };
            screen.push(Line::styled(
                label,
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        frame.render_widget(
            Paragraph::new(screen)
                .alignment(Alignment::Center)
                .style(Style::default().fg(DEFAULT_THEME.fg)),
            rows[0],
        );

        let ratio = self.position.as_secs_f64() / CLIP_LENGTH.as_secs_f64();
        let scrubber = LineGauge::default()
            .filled_style(Style::default().fg(DEFAULT_THEME.primary))
            .line_set(symbols::line::THICK)
            .label(format!(
                "{} / {}",
                format_timestamp(self.position),
                format_timestamp(CLIP_LENGTH)
            ))
            .ratio(ratio.clamp(0.0, 1.0));
        frame.render_widget(scrubber, rows[1]);

        let controls = Line::from(vec![
            Span::styled(
                if self.playing { "❚❚ " } else { "▶ " },
                Style::default().fg(DEFAULT_THEME.primary),
            ),
            Span::styled(
                if self.muted { "🔇 muted" } else { "🔊 sound" },
                Style::default().fg(DEFAULT_THEME.muted),
            ),
        ]);
        frame.render_widget(Paragraph::new(controls), rows[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(' ') => self.toggle_play(),
            KeyCode::Right => self.seek_forward(),
            KeyCode::Left => self.seek_back(),
            KeyCode::Char('m') => self.muted = !self.muted,
            _ => return false,
        }
        true
    }

    fn on_tick(&mut self) {
        if !self.playing {
            return;
        }
        self.position = (self.position + self.tick_rate).min(CLIP_LENGTH);
        if self.is_finished() {
            self.playing = false;
        }
    }

    fn hints(&self) -> &'static [Hint] {
        &[("⎵", "play/pause"), ("←/→", "seek"), ("m", "mute")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(Duration::ZERO), "0:00");
        assert_eq!(format_timestamp(Duration::from_secs(192)), "3:12");
        assert_eq!(format_timestamp(Duration::from_millis(59_999)), "0:59");
    }

    #[test]
    fn test_seek_is_clamped() {
        let mut demo = VideoPlayerDemo::new("Video".into(), Duration::from_millis(250));
        demo.seek_back();
        assert_eq!(demo.position, Duration::ZERO);
        for _ in 0..100 {
            demo.seek_forward();
        }
        assert_eq!(demo.position, CLIP_LENGTH);
    }

    #[test]
    fn test_playback_stops_at_end_and_replays() {
        let mut demo = VideoPlayerDemo::new("Video".into(), Duration::from_secs(5));
        demo.position = CLIP_LENGTH - Duration::from_secs(3);
        demo.toggle_play();
        demo.on_tick();
        assert!(demo.is_finished());
        assert!(!demo.playing);

        demo.toggle_play();
        assert_eq!(demo.position, Duration::ZERO);
        assert!(demo.playing);
    }

    #[test]
    fn test_paused_player_does_not_advance() {
        let mut demo = VideoPlayerDemo::new("Video".into(), Duration::from_secs(1));
        demo.on_tick();
        assert_eq!(demo.position, Duration::ZERO);
    }
}
