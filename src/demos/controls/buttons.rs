//! Focusable buttons with press counters

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Primary,
    Secondary,
    Destructive,
}

impl ButtonRole {
    const ALL: [ButtonRole; 3] = [
        ButtonRole::Primary,
        ButtonRole::Secondary,
        ButtonRole::Destructive,
    ];

    fn label(self) -> &'static str {
        match self {
            ButtonRole::Primary => "Save",
            ButtonRole::Secondary => "Share",
            ButtonRole::Destructive => "Delete",
        }
    }

    fn color(self) -> Color {
        match self {
            ButtonRole::Primary => DEFAULT_THEME.primary,
            ButtonRole::Secondary => DEFAULT_THEME.muted,
            ButtonRole::Destructive => DEFAULT_THEME.error,
        }
    }
}

pub struct ButtonsDemo {
    title: String,
    pub focused: usize,
    pub presses: [u32; 3],
    pub last_pressed: Option<ButtonRole>,
}

impl ButtonsDemo {
    pub fn new(title: String) -> Self {
        ButtonsDemo {
            title,
            focused: 0,
            presses: [0; 3],
            last_pressed: None,
        }
    }

    pub fn press(&mut self) {
        self.presses[self.focused] = self.presses[self.focused].saturating_add(1);
        self.last_pressed = Some(ButtonRole::ALL[self.focused]);
    }
}

impl Demo for ButtonsDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel(&self.title, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[1]);

        for (i, role) in ButtonRole::ALL.iter().enumerate() {
            let is_focused = i == self.focused;
            let style = if is_focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(role.color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(role.color())
            };
            let button = Paragraph::new(format!("{} ({})", role.label(), self.presses[i]))
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(role.color())),
                );
            frame.render_widget(button, columns[i]);
        }

        let status = match self.last_pressed {
            Some(role) => format!("Last pressed: {}", role.label()),
            None => "Nothing pressed yet".to_string(),
        };
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(DEFAULT_THEME.muted)),
            rows[2],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => self.focused = self.focused.saturating_sub(1),
            KeyCode::Right => self.focused = (self.focused + 1).min(ButtonRole::ALL.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.press(),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("←/→", "focus"), ("↵", "press")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_press_counts_focused_button_only() {
        let mut demo = ButtonsDemo::new("Button".into());
        demo.handle_key(key(KeyCode::Right));
        demo.handle_key(key(KeyCode::Enter));
        demo.handle_key(key(KeyCode::Enter));
        assert_eq!(demo.presses, [0, 2, 0]);
        assert_eq!(demo.last_pressed, Some(ButtonRole::Secondary));
    }

    #[test]
    fn test_focus_clamps_at_edges() {
        let mut demo = ButtonsDemo::new("Button".into());
        demo.handle_key(key(KeyCode::Left));
        assert_eq!(demo.focused, 0);
        for _ in 0..5 {
            demo.handle_key(key(KeyCode::Right));
        }
        assert_eq!(demo.focused, 2);
    }
}
