//! Counts and filtered views computed from a todo list on every render

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Active,
    Done,
}

impl Filter {
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Done,
            Filter::Done => Filter::All,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Done => "done",
        }
    }

    fn keeps(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.done,
            Filter::Done => todo.done,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Todo {
    pub text: &'static str,
    pub done: bool,
}

pub struct DerivedStateDemo {
    title: String,
    pub todos: Vec<Todo>,
    pub filter: Filter,
    list_state: ListState,
}

impl DerivedStateDemo {
    pub fn new(title: String) -> Self {
        let todos = [
            ("Write release notes", true),
            ("Review pull request", false),
            ("Update dependencies", false),
            ("Fix flaky test", true),
            ("Plan sprint", false),
        ]
        .into_iter()
        .map(|(text, done)| Todo { text, done })
        .collect();
        DerivedStateDemo {
            title,
            todos,
            filter: Filter::All,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    /// Indices into `todos` that pass the current filter
    pub fn visible(&self) -> Vec<usize> {
        self.todos
            .iter()
            .enumerate()
            .filter(|(_, t)| self.filter.keeps(t))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.done).count()
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        let selected = match (self.list_state.selected(), len) {
            (_, 0) => None,
            (Some(i), n) => Some(i.min(n - 1)),
            (None, _) => Some(0),
        };
        self.list_state.select(selected);
    }
}

impl Demo for DerivedStateDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible = self.visible();
        let items: Vec<ListItem> = visible
            .iter()
            .map(|&i| {
                let todo = &self.todos[i];
                let (mark, style) = if todo.done {
                    (
                        "[x]",
                        Style::default()
                            .fg(DEFAULT_THEME.muted)
                            .add_modifier(Modifier::CROSSED_OUT),
                    )
                } else {
                    ("[ ]", Style::default().fg(DEFAULT_THEME.fg))
                };
                ListItem::new(format!("{} {}", mark, todo.text)).style(style)
            })
            .collect();

        let heading = format!(
            "{} · {} of {} left · showing {}",
            self.title,
            self.remaining(),
            self.todos.len(),
            self.filter.label()
        );
        let list = List::new(items)
            .block(panel(&heading, true))
            .highlight_style(Style::default().bg(DEFAULT_THEME.highlight_bg))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let visible = self.visible();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(i) = self.list_state.selected() {
                    self.list_state.select(Some(i.saturating_sub(1)));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(i) = self.list_state.selected() {
                    if i + 1 < visible.len() {
                        self.list_state.select(Some(i + 1));
                    }
                }
            }
            KeyCode::Char(' ') => {
                if let Some(&index) = self.list_state.selected().and_then(|i| visible.get(i)) {
                    self.todos[index].done = !self.todos[index].done;
                    self.clamp_selection();
                }
            }
            KeyCode::Char('f') => {
                self.filter = self.filter.next();
                self.clamp_selection();
            }
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("⎵", "toggle"), ("f", "filter")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(demo: &mut DerivedStateDemo, code: KeyCode) {
        demo.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_counts_follow_toggles() {
        let mut demo = DerivedStateDemo::new("Derived".into());
        assert_eq!(demo.remaining(), 3);
        press(&mut demo, KeyCode::Down);
        press(&mut demo, KeyCode::Char(' '));
        assert_eq!(demo.remaining(), 2);
    }

    #[test]
    fn test_filter_cycles_and_clamps_selection() {
        let mut demo = DerivedStateDemo::new("Derived".into());
        for _ in 0..4 {
            press(&mut demo, KeyCode::Down);
        }
        press(&mut demo, KeyCode::Char('f'));
        assert_eq!(demo.filter, Filter::Active);
        assert_eq!(demo.visible(), vec![1, 2, 4]);
        assert_eq!(demo.list_state.selected(), Some(2));

        press(&mut demo, KeyCode::Char('f'));
        assert_eq!(demo.visible(), vec![0, 3]);
        assert_eq!(demo.list_state.selected(), Some(1));
    }

    #[test]
    fn test_empty_filter_clears_selection() {
        let mut demo = DerivedStateDemo::new("Derived".into());
        for todo in demo.todos.iter_mut() {
            todo.done = false;
        }
        demo.filter = Filter::Active;
        press(&mut demo, KeyCode::Char('f'));
        assert!(demo.visible().is_empty());
        assert_eq!(demo.list_state.selected(), None);
    }
}
