//! Unread-count badges on list rows

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

/// Counts above this are shown as "99+"
pub const BADGE_CAP: u32 = 99;

/// Text for a badge, or `None` when there is nothing to show
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{}+", BADGE_CAP)),
        n => Some(n.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub name: &'static str,
    pub unread: u32,
}

pub struct BadgeDemo {
    title: String,
    pub mailboxes: Vec<Mailbox>,
    list_state: ListState,
}

impl BadgeDemo {
    pub fn new(title: String) -> Self {
        BadgeDemo {
            title,
            mailboxes: vec![
                Mailbox { name: "Inbox", unread: 4 },
                Mailbox { name: "Mentions", unread: 0 },
                Mailbox { name: "Newsletters", unread: 120 },
                Mailbox { name: "Archive", unread: 0 },
            ],
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    pub fn mark_read(&mut self) {
        let i = self.selected();
        if let Some(mailbox) = self.mailboxes.get_mut(i) {
            mailbox.unread = 0;
        }
    }

    pub fn receive(&mut self) {
        let i = self.selected();
        if let Some(mailbox) = self.mailboxes.get_mut(i) {
            mailbox.unread = mailbox.unread.saturating_add(1);
        }
    }

    pub fn total_unread(&self) -> u32 {
        self.mailboxes.iter().map(|m| m.unread).sum()
    }
}

impl Demo for BadgeDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .mailboxes
            .iter()
            .map(|m| {
                let mut spans = vec![Span::styled(
                    format!("{:<14}", m.name),
                    Style::default().fg(DEFAULT_THEME.fg),
                )];
                if let Some(label) = badge_label(m.unread) {
                    spans.push(Span::styled(
                        format!(" {} ", label),
                        Style::default()
                            .fg(Color::Black)
                            .bg(DEFAULT_THEME.error)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let heading = match badge_label(self.total_unread()) {
            Some(total) => format!("{} · {} unread", self.title, total),
            None => self.title.clone(),
        };
        let list = List::new(items)
            .block(panel(&heading, true))
            .highlight_style(Style::default().bg(DEFAULT_THEME.highlight_bg))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let last = self.mailboxes.len().saturating_sub(1);
        let current = self.selected();
        match key.code {
            KeyCode::Up => self.list_state.select(Some(current.saturating_sub(1))),
            KeyCode::Down => self.list_state.select(Some((current + 1).min(last))),
            KeyCode::Enter => self.mark_read(),
            KeyCode::Char('n') => self.receive(),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("↵", "mark read"), ("n", "new message")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label_caps() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(7).as_deref(), Some("7"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
        assert_eq!(badge_label(100).as_deref(), Some("99+"));
    }

    #[test]
    fn test_mark_read_clears_selected_only() {
        let mut demo = BadgeDemo::new("Badge".into());
        demo.mark_read();
        assert_eq!(demo.mailboxes[0].unread, 0);
        assert_eq!(demo.total_unread(), 120);
    }
}
