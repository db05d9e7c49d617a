use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// A counter owned by the screen itself
pub struct LocalStateDemo {
    title: String,
    pub count: i64,
}

impl LocalStateDemo {
    pub fn new(title: String) -> Self {
        LocalStateDemo { title, count: 0 }
    }
}

impl Demo for LocalStateDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let color = match self.count {
            0 => DEFAULT_THEME.muted,
            n if n > 0 => DEFAULT_THEME.success,
            _ => DEFAULT_THEME.error,
        };
        let text = vec![
            Line::raw(""),
            Line::styled(
                self.count.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(
                "This value lives in the screen and is lost when you go back.",
                Style::default().fg(DEFAULT_THEME.muted),
            ),
        ];
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(panel(&self.title, true)),
            area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('+') | KeyCode::Up => self.count += 1,
            KeyCode::Char('-') | KeyCode::Down => self.count -= 1,
            KeyCode::Char('r') => self.count = 0,
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("+/-", "count"), ("r", "reset")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(demo: &mut LocalStateDemo, code: KeyCode) -> bool {
        demo.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_counter_keys() {
        let mut demo = LocalStateDemo::new("Local State".into());
        press(&mut demo, KeyCode::Char('+'));
        press(&mut demo, KeyCode::Char('+'));
        press(&mut demo, KeyCode::Char('-'));
        assert_eq!(demo.count, 1);
        press(&mut demo, KeyCode::Char('r'));
        assert_eq!(demo.count, 0);
        assert!(!press(&mut demo, KeyCode::Char('z')));
    }
}
