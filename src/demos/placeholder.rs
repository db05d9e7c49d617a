//! Fallback screen for entries without a destination

use super::{panel, Demo};
use crate::catalog::Placeholder;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub struct PlaceholderDemo {
    placeholder: Placeholder,
}

impl PlaceholderDemo {
    pub fn new(placeholder: Placeholder) -> Self {
        PlaceholderDemo { placeholder }
    }
}

impl Demo for PlaceholderDemo {
    fn title(&self) -> &str {
        &self.placeholder.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel(&self.placeholder.title, false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Center vertically
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let text = vec![
            Line::styled(
                self.placeholder.title.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(Placeholder::MESSAGE, Style::default().fg(DEFAULT_THEME.muted)),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), rows[1]);
    }
}
