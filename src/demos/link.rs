//! Developer resource page

use super::{panel, Demo};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Wrap},
    Frame,
};

pub struct LinkDemo {
    title: String,
    pub url: &'static str,
}

impl LinkDemo {
    pub fn new(title: String, url: &'static str) -> Self {
        LinkDemo { title, url }
    }

    /// Host part of the URL, without scheme or path
    pub fn host(&self) -> &str {
        let rest = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(self.url);
        rest.split('/').next().unwrap_or(rest)
    }
}

impl Demo for LinkDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel(&self.title, false).padding(Padding::new(2, 2, 1, 0));

        let lines = vec![
            Line::styled(
                self.title.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.host().to_string(), Style::default().fg(DEFAULT_THEME.muted)),
            Line::raw(""),
            Line::from(vec![
                Span::styled("URL  ", Style::default().fg(DEFAULT_THEME.muted)),
                Span::styled(
                    self.url,
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Line::raw(""),
            Line::styled(
                "Open the link above in your browser.",
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ];

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}
