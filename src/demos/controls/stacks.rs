//! Horizontal and vertical stacks built from layout constraints

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Length,
    Percentage,
    Ratio,
    Min,
}

impl ConstraintKind {
    fn next(self) -> Self {
        match self {
            ConstraintKind::Length => ConstraintKind::Percentage,
            ConstraintKind::Percentage => ConstraintKind::Ratio,
            ConstraintKind::Ratio => ConstraintKind::Min,
            ConstraintKind::Min => ConstraintKind::Length,
        }
    }

    /// Constraints for three stacked children
    pub fn constraints(self) -> [Constraint; 3] {
        match self {
            ConstraintKind::Length => [
                Constraint::Length(8),
                Constraint::Length(12),
                Constraint::Length(16),
            ],
            ConstraintKind::Percentage => [
                Constraint::Percentage(20),
                Constraint::Percentage(30),
                Constraint::Percentage(50),
            ],
            ConstraintKind::Ratio => [
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 2),
            ],
            ConstraintKind::Min => [Constraint::Min(4), Constraint::Min(4), Constraint::Min(4)],
        }
    }
}

pub struct StacksDemo {
    title: String,
    pub direction: Direction,
    pub kind: ConstraintKind,
}

impl StacksDemo {
    pub fn new(title: String) -> Self {
        StacksDemo {
            title,
            direction: Direction::Vertical,
            kind: ConstraintKind::Percentage,
        }
    }
}

impl Demo for StacksDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let heading = format!("{} · {:?} · {:?}", self.title, self.direction, self.kind);
        let block = panel(&heading, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let constraints = self.kind.constraints();
        let chunks = Layout::default()
            .direction(self.direction)
            .constraints(constraints)
            .split(inner);

        let colors: [Color; 3] = [
            DEFAULT_THEME.primary,
            DEFAULT_THEME.secondary,
            DEFAULT_THEME.accent,
        ];
        for (i, chunk) in chunks.iter().enumerate() {
            let child = Paragraph::new(format!("{:?}", constraints[i]))
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors[i]))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(colors[i])),
                );
            frame.render_widget(child, *chunk);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('d') => {
                self.direction = match self.direction {
                    Direction::Horizontal => Direction::Vertical,
                    Direction::Vertical => Direction::Horizontal,
                }
            }
            KeyCode::Char('c') => self.kind = self.kind.next(),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("d", "direction"), ("c", "constraints")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_keys_cycle_direction_and_kind() {
        let mut demo = StacksDemo::new("Stacks".into());
        demo.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE));
        assert_eq!(demo.direction, Direction::Horizontal);
        for _ in 0..4 {
            demo.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        }
        assert_eq!(demo.kind, ConstraintKind::Percentage);
    }

    #[test]
    fn test_ratio_constraints_fill_the_stack() {
        let area = Rect::new(0, 0, 40, 40);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(ConstraintKind::Ratio.constraints())
            .split(area);
        let total: u16 = chunks.iter().map(|c| c.height).sum();
        assert_eq!(total, 40);
    }
}
