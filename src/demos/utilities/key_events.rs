//! Shows the raw key events the terminal delivers

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use std::collections::VecDeque;

pub const HISTORY: usize = 10;

/// Human-readable chord, e.g. `Ctrl+Shift+Left`
pub fn describe(key: &KeyEvent) -> String {
    let mut parts: Vec<String> = Vec::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".into());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".into());
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        parts.push("Shift".into());
    }
    let code = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        other => format!("{:?}", other),
    };
    parts.push(code);
    parts.join("+")
}

pub struct KeyEventsDemo {
    title: String,
    pub log: VecDeque<String>,
}

impl KeyEventsDemo {
    pub fn new(title: String) -> Self {
        KeyEventsDemo {
            title,
            log: VecDeque::with_capacity(HISTORY),
        }
    }
}

impl Demo for KeyEventsDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::styled(
            "Press any key. Esc goes back.",
            Style::default().fg(DEFAULT_THEME.muted),
        )];
        lines.push(Line::raw(""));
        for (i, entry) in self.log.iter().rev().enumerate() {
            let style = if i == 0 {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            lines.push(Line::styled(entry.clone(), style));
        }
        frame.render_widget(Paragraph::new(lines).block(panel(&self.title, true)), area);
    }

    /// Consumes every key, including `q`, so it can be inspected
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.log.len() == HISTORY {
            self.log.pop_front();
        }
        self.log.push_back(describe(&key));
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("any", "log key")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            "Ctrl+a"
        );
        assert_eq!(
            describe(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            "A"
        );
        assert_eq!(
            describe(&KeyEvent::new(
                KeyCode::Left,
                KeyModifiers::SHIFT | KeyModifiers::ALT
            )),
            "Alt+Shift+Left"
        );
        assert_eq!(
            describe(&KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            "Space"
        );
    }

    #[test]
    fn test_log_is_bounded() {
        let mut demo = KeyEventsDemo::new("Keys".into());
        for c in "abcdefghijklmno".chars() {
            assert!(demo.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
        assert_eq!(demo.log.len(), HISTORY);
        assert_eq!(demo.log.front().map(String::as_str), Some("f"));
        assert_eq!(demo.log.back().map(String::as_str), Some("o"));
    }
}
