//! Single-line text input with a cursor

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

pub const MAX_CHARS: usize = 32;

pub struct TextFieldDemo {
    title: String,
    pub input: String,
    /// Cursor position in chars
    pub cursor: usize,
    pub submitted: Vec<String>,
}

impl TextFieldDemo {
    pub fn new(title: String) -> Self {
        TextFieldDemo {
            title,
            input: String::new(),
            cursor: 0,
            submitted: Vec::new(),
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        if self.char_count() >= MAX_CHARS {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.input.remove(at);
        self.cursor -= 1;
    }

    pub fn submit(&mut self) {
        let value = self.input.trim();
        if value.is_empty() {
            return;
        }
        self.submitted.push(value.to_string());
        self.input.clear();
        self.cursor = 0;
    }
}

impl Demo for TextFieldDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let field = Paragraph::new(self.input.as_str())
            .style(Style::default().fg(DEFAULT_THEME.fg))
            .block(panel(&self.title, true));
        frame.render_widget(field, rows[0]);
        frame.set_cursor_position(Position::new(
            rows[0].x + 1 + self.cursor as u16,
            rows[0].y + 1,
        ));

        let count = self.char_count();
        let count_style = if count >= MAX_CHARS {
            Style::default().fg(DEFAULT_THEME.error)
        } else {
            Style::default().fg(DEFAULT_THEME.muted)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {}/{} ", count, MAX_CHARS), count_style),
                Span::styled("characters", Style::default().fg(DEFAULT_THEME.muted)),
            ])),
            rows[1],
        );

        let items: Vec<ListItem> = self
            .submitted
            .iter()
            .rev()
            .map(|s| ListItem::new(format!("• {}", s)))
            .collect();
        frame.render_widget(
            List::new(items).block(panel("Submitted", false)),
            rows[2],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_count(),
            KeyCode::Enter => self.submit(),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("type", "edit"), ("↵", "submit")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let mut demo = TextFieldDemo::new("Text Field".into());
        for c in "hllo".chars() {
            demo.insert(c);
        }
        demo.cursor = 1;
        demo.insert('e');
        assert_eq!(demo.input, "hello");
        assert_eq!(demo.cursor, 2);
    }

    #[test]
    fn test_backspace_handles_multibyte() {
        let mut demo = TextFieldDemo::new("Text Field".into());
        for c in "añb".chars() {
            demo.insert(c);
        }
        demo.cursor = 2;
        demo.backspace();
        assert_eq!(demo.input, "ab");
    }

    #[test]
    fn test_length_limit() {
        let mut demo = TextFieldDemo::new("Text Field".into());
        for _ in 0..(MAX_CHARS + 10) {
            demo.insert('x');
        }
        assert_eq!(demo.input.chars().count(), MAX_CHARS);
    }

    #[test]
    fn test_blank_submit_ignored() {
        let mut demo = TextFieldDemo::new("Text Field".into());
        demo.insert(' ');
        demo.submit();
        assert!(demo.submitted.is_empty());
        demo.insert('a');
        demo.submit();
        assert_eq!(demo.submitted, vec!["a".to_string()]);
        assert_eq!(demo.cursor, 0);
    }
}
