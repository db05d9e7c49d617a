//! One cart store observed by a product pane and a summary pane

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

pub const PRODUCTS: [(&str, u32); 5] = [
    ("Keyboard", 8900),
    ("Mouse", 3400),
    ("Monitor", 21900),
    ("Headset", 7500),
    ("Webcam", 5900),
];

/// Quantities keyed by product index
#[derive(Debug, Default, Clone)]
pub struct CartStore {
    quantities: FxHashMap<usize, u32>,
}

impl CartStore {
    pub fn add(&mut self, product: usize) {
        *self.quantities.entry(product).or_insert(0) += 1;
    }

    pub fn remove(&mut self, product: usize) {
        if let Some(qty) = self.quantities.get_mut(&product) {
            *qty -= 1;
            if *qty == 0 {
                self.quantities.remove(&product);
            }
        }
    }

    pub fn quantity(&self, product: usize) -> u32 {
        self.quantities.get(&product).copied().unwrap_or(0)
    }

    pub fn item_count(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// Total in cents
    pub fn total(&self) -> u32 {
        self.quantities
            .iter()
            .map(|(&i, &qty)| PRODUCTS[i].1 * qty)
            .sum()
    }
}

fn dollars(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub struct SharedStoreDemo {
    title: String,
    pub store: CartStore,
    list_state: ListState,
}

impl SharedStoreDemo {
    pub fn new(title: String) -> Self {
        SharedStoreDemo {
            title,
            store: CartStore::default(),
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }
}

impl Demo for SharedStoreDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let items: Vec<ListItem> = PRODUCTS
            .iter()
            .enumerate()
            .map(|(i, (name, price))| {
                let qty = self.store.quantity(i);
                let badge = if qty > 0 { format!("  ×{}", qty) } else { String::new() };
                ListItem::new(format!("{:<10} {:>8}{}", name, dollars(*price), badge))
            })
            .collect();
        let list = List::new(items)
            .block(panel(&self.title, true))
            .highlight_style(
                Style::default()
                    .bg(DEFAULT_THEME.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, cols[0], &mut self.list_state);

        let summary = vec![
            Line::styled(
                format!("{} items", self.store.item_count()),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Line::styled(
                dollars(self.store.total()),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        frame.render_widget(Paragraph::new(summary).block(panel("Cart", false)), cols[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let selected = self.selected();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_state.select(Some(selected.saturating_sub(1)));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_state.select(Some((selected + 1).min(PRODUCTS.len() - 1)));
            }
            KeyCode::Enter => self.store.add(selected),
            KeyCode::Char('x') => self.store.remove(selected),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("⏎", "add"), ("x", "remove")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_totals() {
        let mut store = CartStore::default();
        store.add(0);
        store.add(0);
        store.add(1);
        assert_eq!(store.item_count(), 3);
        assert_eq!(store.total(), 8900 * 2 + 3400);
        store.remove(0);
        store.remove(1);
        store.remove(1);
        assert_eq!(store.quantity(1), 0);
        assert_eq!(store.total(), 8900);
    }

    #[test]
    fn test_dollars_format() {
        assert_eq!(dollars(8900), "$89.00");
        assert_eq!(dollars(5), "$0.05");
    }
}
