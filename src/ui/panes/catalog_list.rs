//! Grouped, selectable list of catalog entries

use crate::catalog::{CatalogStore, Category, Entry, Route};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

pub const EMPTY_MESSAGE: &str = "No entries in this catalog";

/// Selection over the flattened entry order of one store.
///
/// Section headers are not selectable; `selected` always indexes entries.
#[derive(Debug, Default, Clone)]
pub struct CatalogListState {
    selected: usize,
    list: ListState,
}

impl CatalogListState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub fn selected_entry<'a, C: Category>(
        &self,
        store: &'a CatalogStore<C>,
    ) -> Option<&'a Entry<C>> {
        store.iter().nth(self.selected)
    }
}

fn route_icon(route: Option<Route>) -> &'static str {
    let Some(route) = route else {
        return "○";
    };
    match route {
        Route::Text | Route::TextField => "✎",
        Route::Buttons | Route::Toggles | Route::Picker => "◉",
        Route::Sliders | Route::Progress | Route::Gauge => "▮",
        Route::Stacks | Route::Grid => "▦",
        Route::List | Route::Table | Route::Tabs => "☰",
        Route::Badge => "●",
        Route::LineChart | Route::Sparkline => "∿",
        Route::BarChart => "▂",
        Route::Scatter => "⁘",
        Route::VideoPlayer => "▶",
        Route::Modifiers | Route::Palette => "◆",
        Route::LocalState
        | Route::Binding
        | Route::SharedStore
        | Route::DerivedState
        | Route::Environment => "◇",
        Route::Stopwatch => "◷",
        Route::Upload => "⇪",
        Route::KeyEvents => "⌨",
        Route::Link { .. } => "↗",
    }
}

fn entry_item<C: Category>(entry: &Entry<C>, show_descriptions: bool) -> ListItem<'static> {
    let unrouted = entry.route.is_none();
    let title_style = if unrouted {
        Style::default().fg(DEFAULT_THEME.muted)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let mut spans = vec![
        Span::raw("  "),
        Span::styled(route_icon(entry.route), Style::default().fg(DEFAULT_THEME.primary)),
        Span::raw(" "),
        Span::styled(entry.title, title_style),
    ];
    if entry.route.is_some_and(Route::is_timer_driven) {
        spans.push(Span::styled(" ⟳", Style::default().fg(DEFAULT_THEME.teal)));
    }

    let mut lines = vec![Line::from(spans)];
    if show_descriptions {
        lines.push(Line::styled(
            format!("      {}", entry.description),
            Style::default().fg(DEFAULT_THEME.muted),
        ));
    }
    ListItem::new(lines)
}

/// Render every populated section of `store`.
///
/// Returns the number of rows drawn, headers included.
pub fn render_catalog_list<C: Category>(
    frame: &mut Frame,
    area: Rect,
    store: &CatalogStore<C>,
    state: &mut CatalogListState,
    show_descriptions: bool,
) -> usize {
    if store.is_empty() {
        let empty = Paragraph::new(Line::styled(
            EMPTY_MESSAGE,
            Style::default().fg(DEFAULT_THEME.muted),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return 0;
    }

    let mut items = Vec::new();
    let mut selected_row = None;
    let mut entry_index = 0;
    for (category, entries) in store.sections() {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("{} ", category.icon()),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            Span::styled(
                category.title(),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        ])));
        for entry in entries {
            if entry_index == state.selected {
                selected_row = Some(items.len());
            }
            items.push(entry_item(entry, show_descriptions));
            entry_index += 1;
        }
    }

    let rows = items.len();
    state.list.select(selected_row);
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶");
    frame.render_stateful_widget(list, area, &mut state.list);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let mut state = CatalogListState::default();
        state.select_prev();
        assert_eq!(state.selected(), 0);
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected(), 2);
        state.select_first();
        assert_eq!(state.selected(), 0);
        state.select_last(3);
        assert_eq!(state.selected(), 2);
        state.select_last(0);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_unrouted_entries_use_hollow_icon() {
        assert_eq!(route_icon(None), "○");
        assert_eq!(route_icon(Some(Route::Link { url: "https://docs.rs" })), "↗");
    }
}
