//! Text modifiers and border types

use crate::demos::{key_span, panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub const MODIFIERS: [(Modifier, &str); 6] = [
    (Modifier::BOLD, "bold"),
    (Modifier::ITALIC, "italic"),
    (Modifier::UNDERLINED, "underlined"),
    (Modifier::DIM, "dim"),
    (Modifier::REVERSED, "reversed"),
    (Modifier::CROSSED_OUT, "crossed out"),
];

const BORDERS: [BorderType; 4] = [
    BorderType::Plain,
    BorderType::Rounded,
    BorderType::Double,
    BorderType::Thick,
];

pub struct ModifiersDemo {
    title: String,
    pub active: Modifier,
    pub border: usize,
}

impl ModifiersDemo {
    pub fn new(title: String) -> Self {
        ModifiersDemo {
            title,
            active: Modifier::empty(),
            border: 0,
        }
    }

    /// Toggle the modifier at `index` in [`MODIFIERS`]
    pub fn toggle(&mut self, index: usize) {
        if let Some((modifier, _)) = MODIFIERS.get(index) {
            self.active.toggle(*modifier);
        }
    }

    pub fn border_type(&self) -> BorderType {
        BORDERS[self.border % BORDERS.len()]
    }
}

impl Demo for ModifiersDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel(&self.title, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(0)])
            .split(inner);

        let mut lines: Vec<Line> = MODIFIERS
            .iter()
            .enumerate()
            .map(|(i, (modifier, name))| {
                let on = self.active.contains(*modifier);
                Line::from(vec![
                    Span::styled(
                        format!("{} ", i + 1),
                        Style::default().fg(DEFAULT_THEME.secondary),
                    ),
                    Span::styled(
                        if on { "☑ " } else { "☐ " },
                        Style::default().fg(if on {
                            DEFAULT_THEME.success
                        } else {
                            DEFAULT_THEME.muted
                        }),
                    ),
                    Span::styled(*name, Style::default().fg(DEFAULT_THEME.fg)),
                ])
            })
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            key_span("b"),
            Span::styled(
                format!(" border: {:?}", self.border_type()),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]));
        frame.render_widget(Paragraph::new(lines), columns[0]);

        let preview = Paragraph::new("The quick brown fox jumps over the lazy dog")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(self.active),
            )
            .block(
                Block::default()
                    .title(" Preview ")
                    .borders(Borders::ALL)
                    .border_type(self.border_type())
                    .border_style(Style::default().fg(DEFAULT_THEME.accent)),
            );
        frame.render_widget(preview, columns[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.toggle(index);
            }
            KeyCode::Char('b') => self.border = (self.border + 1) % BORDERS.len(),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("1-6", "modifier"), ("b", "border")]
    }
}
