//! Segmented picker

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const FLAVORS: [&str; 4] = ["Vanilla", "Chocolate", "Strawberry", "Mint"];

pub struct PickerDemo {
    title: String,
    pub selected: usize,
}

impl PickerDemo {
    pub fn new(title: String) -> Self {
        PickerDemo { title, selected: 0 }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % FLAVORS.len();
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + FLAVORS.len() - 1) % FLAVORS.len();
    }
}

impl Demo for PickerDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel(&self.title, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let mut segments = Vec::new();
        for (i, flavor) in FLAVORS.iter().enumerate() {
            if i > 0 {
                segments.push(Span::styled("│", Style::default().fg(DEFAULT_THEME.muted)));
            }
            let style = if i == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            segments.push(Span::styled(format!(" {} ", flavor), style));
        }
        frame.render_widget(Paragraph::new(Line::from(segments)), rows[0]);

        frame.render_widget(
            Paragraph::new(format!("You picked: {}", FLAVORS[self.selected]))
                .style(Style::default().fg(DEFAULT_THEME.muted)),
            rows[2],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.next(),
            KeyCode::Left | KeyCode::Char('h') => self.prev(),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("←/→", "pick")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_wraps_both_ways() {
        let mut demo = PickerDemo::new("Picker".into());
        demo.prev();
        assert_eq!(demo.selected, FLAVORS.len() - 1);
        demo.next();
        assert_eq!(demo.selected, 0);
    }
}
