//! A queue of uploads with limited concurrency and seeded failures

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    symbols,
    widgets::{Cell, Row, Table},
    Frame,
};

pub const MAX_CONCURRENT: usize = 2;
/// Chance that an upload fails on any given tick
const FAILURE_RATE: f64 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    Queued,
    Uploading,
    Done,
    Failed,
}

#[derive(Debug, Clone)]
pub struct Upload {
    pub name: &'static str,
    pub size_kb: u32,
    pub sent_kb: u32,
    pub state: UploadState,
}

impl Upload {
    fn new(name: &'static str, size_kb: u32) -> Self {
        Upload {
            name,
            size_kb,
            sent_kb: 0,
            state: UploadState::Queued,
        }
    }

    pub fn ratio(&self) -> f64 {
        self.sent_kb as f64 / self.size_kb.max(1) as f64
    }
}

pub struct UploadDemo {
    title: String,
    rng: StdRng,
    pub uploads: Vec<Upload>,
}

impl UploadDemo {
    pub fn new(title: String, seed: u64) -> Self {
        UploadDemo {
            title,
            rng: StdRng::seed_from_u64(seed),
            uploads: vec![
                Upload::new("holiday.mov", 9600),
                Upload::new("thesis.pdf", 2400),
                Upload::new("backup.tar", 12800),
                Upload::new("avatar.png", 320),
                Upload::new("notes.md", 48),
                Upload::new("dataset.csv", 5600),
            ],
        }
    }

    pub fn active(&self) -> usize {
        self.uploads
            .iter()
            .filter(|u| u.state == UploadState::Uploading)
            .count()
    }

    fn start_queued(&mut self) {
        let mut free = MAX_CONCURRENT.saturating_sub(self.active());
        for upload in self.uploads.iter_mut() {
            if free == 0 {
                break;
            }
            if upload.state == UploadState::Queued {
                upload.state = UploadState::Uploading;
                free -= 1;
            }
        }
    }

    /// Re-queue every failed upload from the start
    pub fn retry_failed(&mut self) -> usize {
        let mut count = 0;
        for upload in self.uploads.iter_mut().filter(|u| u.state == UploadState::Failed) {
            upload.sent_kb = 0;
            upload.state = UploadState::Queued;
            count += 1;
        }
        count
    }

    pub fn is_finished(&self) -> bool {
        self.uploads
            .iter()
            .all(|u| matches!(u.state, UploadState::Done | UploadState::Failed))
    }
}

impl Demo for UploadDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .uploads
            .iter()
            .map(|u| {
                let (label, color) = match u.state {
                    UploadState::Queued => ("queued", DEFAULT_THEME.muted),
                    UploadState::Uploading => ("uploading", DEFAULT_THEME.primary),
                    UploadState::Done => ("done", DEFAULT_THEME.success),
                    UploadState::Failed => ("failed", DEFAULT_THEME.error),
                };
                let filled = (u.ratio() * 10.0).round() as usize;
                let bar = format!(
                    "{}{}",
                    symbols::block::FULL.repeat(filled),
                    "·".repeat(10 - filled.min(10))
                );
                Row::new(vec![
                    Cell::from(u.name),
                    Cell::from(format!("{} KB", u.size_kb)),
                    Cell::from(bar).style(Style::default().fg(color)),
                    Cell::from(label).style(Style::default().fg(color)),
                ])
            })
            .collect();

        let heading = format!("{} · {}/{} active", self.title, self.active(), MAX_CONCURRENT);
        let table = Table::new(
            rows,
            [
                Constraint::Length(14),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Min(9),
            ],
        )
        .header(
            Row::new(vec!["File", "Size", "Progress", "State"])
                .style(Style::default().fg(DEFAULT_THEME.secondary)),
        )
        .block(panel(&heading, true));
        frame.render_widget(table, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('r') => {
                self.retry_failed();
            }
            _ => return false,
        }
        true
    }

    fn on_tick(&mut self) {
        self.start_queued();
        for upload in self
            .uploads
            .iter_mut()
            .filter(|u| u.state == UploadState::Uploading)
        {
            if self.rng.gen_bool(FAILURE_RATE) {
                upload.state = UploadState::Failed;
                continue;
            }
            let step = self.rng.gen_range(200..=800);
            upload.sent_kb = (upload.sent_kb + step).min(upload.size_kb);
            if upload.sent_kb == upload.size_kb {
                upload.state = UploadState::Done;
            }
        }
    }

    fn hints(&self) -> &'static [Hint] {
        &[("r", "retry failed")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrency_limit_holds() {
        let mut demo = UploadDemo::new("Upload".into(), 1);
        for _ in 0..200 {
            demo.on_tick();
            assert!(demo.active() <= MAX_CONCURRENT);
        }
        assert!(demo.is_finished());
    }

    #[test]
    fn test_retry_requeues_failures() {
        let mut demo = UploadDemo::new("Upload".into(), 1);
        demo.uploads[0].state = UploadState::Failed;
        demo.uploads[0].sent_kb = 100;
        demo.uploads[1].state = UploadState::Done;
        assert_eq!(demo.retry_failed(), 1);
        assert_eq!(demo.uploads[0].state, UploadState::Queued);
        assert_eq!(demo.uploads[0].sent_kb, 0);
        assert_eq!(demo.uploads[1].state, UploadState::Done);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let mut a = UploadDemo::new("Upload".into(), 42);
        let mut b = UploadDemo::new("Upload".into(), 42);
        for _ in 0..30 {
            a.on_tick();
            b.on_tick();
        }
        let states = |d: &UploadDemo| {
            d.uploads
                .iter()
                .map(|u| (u.state, u.sent_kb))
                .collect::<Vec<_>>()
        };
        assert_eq!(states(&a), states(&b));
    }
}
