//! Tab view switching between pages

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Tabs, Wrap},
    Frame,
};

const PAGES: [(&str, &str); 3] = [
    (
        "Home",
        "Recent activity and shortcuts live here. Use the arrow keys to move between pages.",
    ),
    (
        "Search",
        "A search page would host a text field and a filtered result list.",
    ),
    (
        "Profile",
        "Account details, preferences and sign-out controls.",
    ),
];

pub struct TabsDemo {
    title: String,
    pub page: usize,
}

impl TabsDemo {
    pub fn new(title: String) -> Self {
        TabsDemo { title, page: 0 }
    }
}

impl Demo for TabsDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let tabs = Tabs::new(PAGES.iter().map(|(name, _)| *name))
            .block(panel(&self.title, true))
            .select(self.page)
            .style(Style::default().fg(DEFAULT_THEME.muted))
            .highlight_style(
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        frame.render_widget(tabs, rows[0]);

        let (name, body) = PAGES[self.page];
        frame.render_widget(
            Paragraph::new(body)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(DEFAULT_THEME.fg))
                .block(panel(name, false)),
            rows[1],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Right => self.page = (self.page + 1).min(PAGES.len() - 1),
            KeyCode::Left => self.page = self.page.saturating_sub(1),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("←/→", "page")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_page_stays_in_range() {
        let mut demo = TabsDemo::new("Tab View".into());
        demo.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(demo.page, 0);
        for _ in 0..5 {
            demo.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        }
        assert_eq!(demo.page, PAGES.len() - 1);
    }
}
