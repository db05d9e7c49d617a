//! Determinate and indeterminate progress driven by ticks

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

pub const TOTAL_BYTES: u64 = 48 * 1024 * 1024;
pub const BYTES_PER_TICK: u64 = 1536 * 1024;
const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
    Running,
    Paused,
    Complete,
}

pub struct ProgressDemo {
    title: String,
    pub downloaded: u64,
    pub state: DownloadState,
    pub spinner_frame: usize,
}

impl ProgressDemo {
    pub fn new(title: String) -> Self {
        ProgressDemo {
            title,
            downloaded: 0,
            state: DownloadState::Running,
            spinner_frame: 0,
        }
    }

    pub fn ratio(&self) -> f64 {
        (self.downloaded as f64 / TOTAL_BYTES as f64).clamp(0.0, 1.0)
    }

    pub fn restart(&mut self) {
        self.downloaded = 0;
        self.state = DownloadState::Running;
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            DownloadState::Running => DownloadState::Paused,
            DownloadState::Paused => DownloadState::Running,
            DownloadState::Complete => DownloadState::Complete,
        };
    }
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

impl Demo for ProgressDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel(&self.title, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new("Downloading archive.tar.gz").style(Style::default().fg(DEFAULT_THEME.fg)),
            rows[0],
        );

        let gauge_color = match self.state {
            DownloadState::Complete => DEFAULT_THEME.success,
            DownloadState::Paused => DEFAULT_THEME.muted,
            DownloadState::Running => DEFAULT_THEME.primary,
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(gauge_color).bg(DEFAULT_THEME.highlight_bg))
            .ratio(self.ratio())
            .label(format!(
                "{:.1} / {:.1} MB",
                megabytes(self.downloaded),
                megabytes(TOTAL_BYTES)
            ));
        frame.render_widget(gauge, rows[1]);

        let status = match self.state {
            DownloadState::Running => Span::styled("Running", Style::default().fg(DEFAULT_THEME.primary)),
            DownloadState::Paused => Span::styled("Paused", Style::default().fg(DEFAULT_THEME.warning)),
            DownloadState::Complete => Span::styled(
                "Complete",
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        frame.render_widget(Paragraph::new(Line::from(status)), rows[2]);

        // Indeterminate: only the spinner moves
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    SPINNER[self.spinner_frame % SPINNER.len()],
                    Style::default().fg(DEFAULT_THEME.accent),
                ),
                Span::styled(" Resolving mirrors…", Style::default().fg(DEFAULT_THEME.muted)),
            ])),
            rows[4],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('r') => self.restart(),
            _ => return false,
        }
        true
    }

    fn on_tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        if self.state != DownloadState::Running {
            return;
        }
        self.downloaded = (self.downloaded + BYTES_PER_TICK).min(TOTAL_BYTES);
        if self.downloaded == TOTAL_BYTES {
            self.state = DownloadState::Complete;
        }
    }

    fn hints(&self) -> &'static [Hint] {
        &[("⎵", "pause"), ("r", "restart")]
    }
}
