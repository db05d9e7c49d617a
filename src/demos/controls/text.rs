//! Styled text with alignment and wrapping

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

const SAMPLE: &str = "Terminal interfaces are built from cells. Each cell holds one \
grapheme, a foreground color, a background color and a set of modifiers. \
Paragraphs lay text out inside a rectangle, optionally wrapping long lines \
at word boundaries.";

pub struct TextDemo {
    title: String,
    pub alignment: Alignment,
    pub wrap: bool,
}

impl TextDemo {
    pub fn new(title: String) -> Self {
        TextDemo {
            title,
            alignment: Alignment::Left,
            wrap: true,
        }
    }

    fn cycle_alignment(&mut self) {
        self.alignment = match self.alignment {
            Alignment::Left => Alignment::Center,
            Alignment::Center => Alignment::Right,
            Alignment::Right => Alignment::Left,
        };
    }
}

impl Demo for TextDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let heading = Line::from(vec![
            Span::styled(
                "Headline ",
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("subhead ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(
                "caption",
                Style::default()
                    .fg(DEFAULT_THEME.muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]);

        let mut text = Text::from(vec![heading, Line::raw("")]);
        text.lines
            .extend(Text::styled(SAMPLE, Style::default().fg(DEFAULT_THEME.fg)).lines);
        text.lines.push(Line::raw(""));
        text.lines.push(Line::styled(
            format!(
                "alignment: {:?}   wrap: {}",
                self.alignment,
                if self.wrap { "on" } else { "off" }
            ),
            Style::default().fg(DEFAULT_THEME.muted),
        ));

        let mut paragraph = Paragraph::new(text)
            .block(panel(&self.title, true))
            .alignment(self.alignment);
        if self.wrap {
            paragraph = paragraph.wrap(Wrap { trim: true });
        }
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('a') => self.cycle_alignment(),
            KeyCode::Char('w') => self.wrap = !self.wrap,
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("a", "align"), ("w", "wrap")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_alignment_cycles_back_to_left() {
        let mut demo = TextDemo::new("Text".into());
        for _ in 0..3 {
            demo.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        }
        assert_eq!(demo.alignment, Alignment::Left);
    }
}
