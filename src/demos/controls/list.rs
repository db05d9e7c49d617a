//! Sectioned list with selection and deletion

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Produce {
    pub name: &'static str,
    pub section: &'static str,
}

fn initial_items() -> Vec<Produce> {
    let fruit = ["Apple", "Banana", "Cherry", "Mango"];
    let vegetables = ["Carrot", "Leek", "Spinach"];
    fruit
        .iter()
        .map(|&name| Produce { name, section: "Fruit" })
        .chain(
            vegetables
                .iter()
                .map(|&name| Produce { name, section: "Vegetables" }),
        )
        .collect()
}

pub struct ListDemo {
    title: String,
    pub items: Vec<Produce>,
    /// Index into `items`
    pub selected: Option<usize>,
}

impl ListDemo {
    pub fn new(title: String) -> Self {
        ListDemo {
            title,
            items: initial_items(),
            selected: Some(0),
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(i) = self.selected else { return };
        if i >= self.items.len() {
            return;
        }
        self.items.remove(i);
        self.selected = if self.items.is_empty() {
            None
        } else {
            Some(i.min(self.items.len() - 1))
        };
    }

    fn move_selection(&mut self, down: bool) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let current = self.selected.unwrap_or(0);
        self.selected = Some(if down {
            (current + 1).min(last)
        } else {
            current.saturating_sub(1)
        });
    }
}

impl Demo for ListDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut rows: Vec<ListItem> = Vec::new();
        let mut selected_row = None;
        let mut current_section = "";
        for (i, item) in self.items.iter().enumerate() {
            if item.section != current_section {
                current_section = item.section;
                rows.push(ListItem::new(Line::styled(
                    item.section.to_uppercase(),
                    Style::default()
                        .fg(DEFAULT_THEME.muted)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            if self.selected == Some(i) {
                selected_row = Some(rows.len());
            }
            rows.push(ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(item.name, Style::default().fg(DEFAULT_THEME.fg)),
            ])));
        }
        if rows.is_empty() {
            rows.push(ListItem::new(Line::styled(
                "(all items deleted)",
                Style::default().fg(DEFAULT_THEME.muted),
            )));
        }

        let list = List::new(rows)
            .block(panel(&self.title, true))
            .highlight_style(Style::default().bg(DEFAULT_THEME.highlight_bg))
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(selected_row);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("↑/↓", "select"), ("d", "delete")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_last_moves_selection_up() {
        let mut demo = ListDemo::new("List".into());
        let last = demo.items.len() - 1;
        demo.selected = Some(last);
        demo.delete_selected();
        assert_eq!(demo.selected, Some(last - 1));
    }

    #[test]
    fn test_delete_everything() {
        let mut demo = ListDemo::new("List".into());
        while !demo.items.is_empty() {
            demo.delete_selected();
        }
        assert_eq!(demo.selected, None);
        demo.delete_selected();
        demo.move_selection(true);
        assert_eq!(demo.selected, None);
    }
}
