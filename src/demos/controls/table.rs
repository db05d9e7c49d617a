//! Sortable table of processes

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table, TableState},
    Frame,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Process {
    pub pid: u32,
    pub name: &'static str,
    pub cpu: f64,
    pub memory_mb: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Pid,
    Name,
    Cpu,
    Memory,
}

impl SortColumn {
    const HEADERS: [&'static str; 4] = ["PID", "Name", "CPU %", "Memory"];

    fn next(self) -> Self {
        match self {
            SortColumn::Pid => SortColumn::Name,
            SortColumn::Name => SortColumn::Cpu,
            SortColumn::Cpu => SortColumn::Memory,
            SortColumn::Memory => SortColumn::Pid,
        }
    }

    fn index(self) -> usize {
        match self {
            SortColumn::Pid => 0,
            SortColumn::Name => 1,
            SortColumn::Cpu => 2,
            SortColumn::Memory => 3,
        }
    }
}

fn sample_processes() -> Vec<Process> {
    vec![
        Process { pid: 412, name: "shell", cpu: 0.4, memory_mb: 12 },
        Process { pid: 1021, name: "editor", cpu: 3.1, memory_mb: 284 },
        Process { pid: 1377, name: "compiler", cpu: 87.5, memory_mb: 1450 },
        Process { pid: 88, name: "indexer", cpu: 12.0, memory_mb: 96 },
        Process { pid: 2290, name: "browser", cpu: 22.8, memory_mb: 2210 },
        Process { pid: 3, name: "init", cpu: 0.0, memory_mb: 4 },
    ]
}

pub struct TableDemo {
    title: String,
    pub rows: Vec<Process>,
    pub sort_by: SortColumn,
    pub descending: bool,
    state: TableState,
}

impl TableDemo {
    pub fn new(title: String) -> Self {
        let mut demo = TableDemo {
            title,
            rows: sample_processes(),
            sort_by: SortColumn::Cpu,
            descending: true,
            state: TableState::default().with_selected(Some(0)),
        };
        demo.sort();
        demo
    }

    pub fn sort(&mut self) {
        let column = self.sort_by;
        let descending = self.descending;
        self.rows.sort_by(|a, b| {
            let ord = match column {
                SortColumn::Pid => a.pid.cmp(&b.pid),
                SortColumn::Name => a.name.cmp(b.name),
                SortColumn::Cpu => a.cpu.total_cmp(&b.cpu),
                SortColumn::Memory => a.memory_mb.cmp(&b.memory_mb),
            };
            if descending {
                ord.reverse()
            } else {
                ord
            }
        });
    }
}

impl Demo for TableDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let arrow = if self.descending { "▼" } else { "▲" };
        let header = Row::new(SortColumn::HEADERS.iter().enumerate().map(|(i, h)| {
            if i == self.sort_by.index() {
                Cell::from(format!("{} {}", h, arrow)).style(
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Cell::from(*h).style(Style::default().fg(DEFAULT_THEME.primary))
            }
        }));

        let rows = self.rows.iter().map(|p| {
            Row::new(vec![
                Cell::from(p.pid.to_string()),
                Cell::from(p.name),
                Cell::from(format!("{:>5.1}", p.cpu))
                    .style(Style::default().fg(DEFAULT_THEME.load_color(p.cpu / 100.0))),
                Cell::from(format!("{} MB", p.memory_mb)),
            ])
            .style(Style::default().fg(DEFAULT_THEME.fg))
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Min(12),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(panel(&self.title, true))
        .highlight_style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let last = self.rows.len().saturating_sub(1);
        let current = self.state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Up => self.state.select(Some(current.saturating_sub(1))),
            KeyCode::Down => self.state.select(Some((current + 1).min(last))),
            KeyCode::Char('s') => {
                self.sort_by = self.sort_by.next();
                self.sort();
            }
            KeyCode::Char('r') => {
                self.descending = !self.descending;
                self.sort();
            }
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("s", "sort column"), ("r", "reverse")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sort_is_cpu_descending() {
        let demo = TableDemo::new("Table".into());
        assert_eq!(demo.rows[0].name, "compiler");
        assert_eq!(demo.rows.last().map(|p| p.name), Some("init"));
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let mut demo = TableDemo::new("Table".into());
        demo.sort_by = SortColumn::Name;
        demo.descending = false;
        demo.sort();
        let names: Vec<_> = demo.rows.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["browser", "compiler", "editor", "indexer", "init", "shell"]
        );
    }
}
