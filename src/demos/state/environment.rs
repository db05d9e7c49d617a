//! Values injected from the outside and read by nested views

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub accent: Color,
    pub compact: bool,
}

const ACCENTS: [Color; 4] = [
    DEFAULT_THEME.primary,
    DEFAULT_THEME.secondary,
    DEFAULT_THEME.success,
    DEFAULT_THEME.accent,
];

/// A leaf view that knows nothing but the environment it is given
fn profile_card(env: &Environment) -> Vec<Line<'static>> {
    let name = Style::default().fg(env.accent).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::styled("Ferris", name)];
    if !env.compact {
        lines.push(Line::styled(
            "Rustacean since 2015",
            Style::default().fg(DEFAULT_THEME.muted),
        ));
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled("● online", Style::default().fg(env.accent)));
    lines
}

pub struct EnvironmentDemo {
    title: String,
    accent_index: usize,
    pub env: Environment,
}

impl EnvironmentDemo {
    pub fn new(title: String) -> Self {
        EnvironmentDemo {
            title,
            accent_index: 0,
            env: Environment {
                accent: ACCENTS[0],
                compact: false,
            },
        }
    }
}

impl Demo for EnvironmentDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel(&self.title, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        for (i, col) in cols.iter().enumerate() {
            let card = Paragraph::new(profile_card(&self.env))
                .block(panel(&format!("card {}", i + 1), false));
            frame.render_widget(card, *col);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('t') => {
                self.accent_index = (self.accent_index + 1) % ACCENTS.len();
                self.env.accent = ACCENTS[self.accent_index];
            }
            KeyCode::Char('c') => self.env.compact = !self.env.compact,
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("t", "accent"), ("c", "compact")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_accent_cycles() {
        let mut demo = EnvironmentDemo::new("Environment".into());
        for _ in 0..ACCENTS.len() {
            demo.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE));
        }
        assert_eq!(demo.env.accent, ACCENTS[0]);
    }

    #[test]
    fn test_compact_card_is_shorter() {
        let full = profile_card(&Environment {
            accent: ACCENTS[0],
            compact: false,
        });
        let compact = profile_card(&Environment {
            accent: ACCENTS[0],
            compact: true,
        });
        assert!(compact.len() < full.len());
    }
}
