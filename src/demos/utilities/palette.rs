//! The application theme as swatches

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        other => format!("{:?}", other),
    }
}

pub struct PaletteDemo {
    title: String,
    pub selected: usize,
}

impl PaletteDemo {
    pub fn new(title: String) -> Self {
        PaletteDemo { title, selected: 0 }
    }
}

impl Demo for PaletteDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = DEFAULT_THEME
            .swatches()
            .iter()
            .enumerate()
            .map(|(i, &(name, color))| {
                let marker = if i == self.selected { "▶ " } else { "  " };
                let name_style = if i == self.selected {
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(DEFAULT_THEME.muted)
                };
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled("      ", Style::default().bg(color)),
                    Span::raw("  "),
                    Span::styled(format!("{:<16}", name), name_style),
                    Span::styled(hex(color), Style::default().fg(color)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).block(panel(&self.title, true)), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let count = DEFAULT_THEME.swatches().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = (self.selected + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % count;
            }
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("↑/↓", "select")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_hex() {
        assert_eq!(hex(Color::Rgb(137, 180, 250)), "#89b4fa");
        assert_eq!(hex(Color::Red), "Red");
    }

    #[test]
    fn test_selection_wraps() {
        let mut demo = PaletteDemo::new("Palette".into());
        demo.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(demo.selected, DEFAULT_THEME.swatches().len() - 1);
        demo.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(demo.selected, 0);
    }
}
