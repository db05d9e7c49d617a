//! Cells laid out in a grid with an adjustable column count

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub const MIN_COLUMNS: usize = 1;
pub const MAX_COLUMNS: usize = 6;
const CELL_COUNT: usize = 12;
const CELL_HEIGHT: u16 = 3;

pub struct GridDemo {
    title: String,
    pub columns: usize,
    pub selected: usize,
}

impl GridDemo {
    pub fn new(title: String) -> Self {
        GridDemo {
            title,
            columns: 3,
            selected: 0,
        }
    }

    pub fn rows(&self) -> usize {
        CELL_COUNT.div_ceil(self.columns)
    }

    fn move_by(&mut self, delta: isize) {
        let target = self.selected as isize + delta;
        if (0..CELL_COUNT as isize).contains(&target) {
            self.selected = target as usize;
        }
    }
}

impl Demo for GridDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let heading = format!("{} · {} columns", self.title, self.columns);
        let block = panel(&heading, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CELL_HEIGHT); self.rows()])
            .split(inner);

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, self.columns as u32); self.columns])
                .split(*row_area);
            for (col, cell_area) in cells.iter().enumerate() {
                let index = row * self.columns + col;
                if index >= CELL_COUNT {
                    break;
                }
                let selected = index == self.selected;
                let border_style = if selected {
                    Style::default()
                        .fg(DEFAULT_THEME.border_focused)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(DEFAULT_THEME.border_normal)
                };
                let cell = Paragraph::new(format!("{}", index + 1))
                    .alignment(Alignment::Center)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(border_style),
                    );
                frame.render_widget(cell, *cell_area);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('+') => self.columns = (self.columns + 1).min(MAX_COLUMNS),
            KeyCode::Char('-') => self.columns = self.columns.saturating_sub(1).max(MIN_COLUMNS),
            KeyCode::Left => self.move_by(-1),
            KeyCode::Right => self.move_by(1),
            KeyCode::Up => self.move_by(-(self.columns as isize)),
            KeyCode::Down => self.move_by(self.columns as isize),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("+/-", "columns"), ("arrows", "move")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_column_bounds() {
        let mut demo = GridDemo::new("Grid".into());
        for _ in 0..10 {
            demo.handle_key(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE));
        }
        assert_eq!(demo.columns, MAX_COLUMNS);
        for _ in 0..10 {
            demo.handle_key(KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE));
        }
        assert_eq!(demo.columns, MIN_COLUMNS);
        assert_eq!(demo.rows(), CELL_COUNT);
    }

    #[test]
    fn test_vertical_move_stays_in_grid() {
        let mut demo = GridDemo::new("Grid".into());
        demo.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(demo.selected, 0);
        demo.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(demo.selected, 3);
    }
}
