//! Main TUI application state and logic

use crate::catalog::builtin::{CatalogTab, Catalogs};
use crate::catalog::{Destination, Route};
use crate::config::Config;
use crate::demos::{self, Demo, DemoContext, Hint};
use crate::ui::panes::{
    render_catalog_list, render_status_bar, render_tab_bar, CatalogListState,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

const CATALOG_HINTS: &[Hint] = &[
    ("↑/↓", "select"),
    ("⏎", "open"),
    ("⇥", "tab"),
    ("q", "quit"),
];

/// The main application state
pub struct App {
    pub catalogs: Catalogs,

    /// Currently visible catalog tab
    pub tab: CatalogTab,

    /// Per-tab selection, indexed by [`CatalogTab::index`]
    lists: [CatalogListState; 4],

    /// Open demos; the last one is visible
    stack: Vec<Box<dyn Demo>>,

    /// Message shown in the status bar
    pub status_message: String,

    pub should_quit: bool,

    ctx: DemoContext,
    show_descriptions: bool,
    tick_rate: Duration,
    last_tick: Instant,
}

impl App {
    pub fn new(catalogs: Catalogs, config: &Config) -> Self {
        App {
            catalogs,
            tab: config.ui.initial_tab,
            lists: Default::default(),
            stack: Vec::new(),
            status_message: String::new(),
            should_quit: false,
            ctx: DemoContext::from(config),
            show_descriptions: config.ui.show_descriptions,
            tick_rate: config.ui.tick_rate(),
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.on_tick();
                self.last_tick = Instant::now();
            }

            // Use poll with timeout so ticks keep flowing without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Number of open demos
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Title of the visible demo, if any
    pub fn current_title(&self) -> Option<&str> {
        self.stack.last().map(|d| d.title())
    }

    pub fn list_state(&self, tab: CatalogTab) -> &CatalogListState {
        &self.lists[tab.index()]
    }

    /// Title of the selected entry on the current tab
    pub fn selected_title(&self) -> Option<&'static str> {
        let state = &self.lists[self.tab.index()];
        let catalogs = &self.catalogs;
        match self.tab {
            CatalogTab::Controls => state.selected_entry(&catalogs.controls).map(|e| e.title),
            CatalogTab::State => state.selected_entry(&catalogs.state).map(|e| e.title),
            CatalogTab::Utilities => state.selected_entry(&catalogs.utilities).map(|e| e.title),
            CatalogTab::Resources => state.selected_entry(&catalogs.resources).map(|e| e.title),
        }
    }

    fn selected_destination(&self) -> Option<Destination> {
        let state = &self.lists[self.tab.index()];
        match self.tab {
            CatalogTab::Controls => state
                .selected_entry(&self.catalogs.controls)
                .map(|e| self.catalogs.controls.destination(e)),
            CatalogTab::State => state
                .selected_entry(&self.catalogs.state)
                .map(|e| self.catalogs.state.destination(e)),
            CatalogTab::Utilities => state
                .selected_entry(&self.catalogs.utilities)
                .map(|e| self.catalogs.utilities.destination(e)),
            CatalogTab::Resources => state
                .selected_entry(&self.catalogs.resources)
                .map(|e| self.catalogs.resources.destination(e)),
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        render_tab_bar(frame, chunks[0], self.tab, &self.catalogs);

        let main = chunks[1];
        if let Some(demo) = self.stack.last_mut() {
            demo.render(frame, main);
        } else {
            let state = &mut self.lists[self.tab.index()];
            let descriptions = self.show_descriptions;
            match self.tab {
                CatalogTab::Controls => {
                    render_catalog_list(frame, main, &self.catalogs.controls, state, descriptions)
                }
                CatalogTab::State => {
                    render_catalog_list(frame, main, &self.catalogs.state, state, descriptions)
                }
                CatalogTab::Utilities => {
                    render_catalog_list(frame, main, &self.catalogs.utilities, state, descriptions)
                }
                CatalogTab::Resources => {
                    render_catalog_list(frame, main, &self.catalogs.resources, state, descriptions)
                }
            };
        }

        let mut breadcrumb = vec![self.tab.title()];
        breadcrumb.extend(self.stack.iter().map(|d| d.title()));
        let mut hints: Vec<Hint> = match self.stack.last() {
            Some(demo) => demo.hints().to_vec(),
            None => CATALOG_HINTS.to_vec(),
        };
        if !self.stack.is_empty() {
            hints.push(("esc", "back"));
        }
        render_status_bar(frame, chunks[2], &breadcrumb, &self.status_message, &hints);
    }

    /// Handle keyboard events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if !self.stack.is_empty() {
            if key.code == KeyCode::Esc {
                self.pop();
                return;
            }
            let consumed = self
                .stack
                .last_mut()
                .is_some_and(|demo| demo.handle_key(key));
            if !consumed && key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        let len = self.catalogs.len(self.tab);
        let current = self.tab.index();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => self.switch_tab(self.tab.next()),
            KeyCode::BackTab | KeyCode::Left => self.switch_tab(self.tab.prev()),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.switch_tab(CatalogTab::ALL[index]);
            }
            KeyCode::Up | KeyCode::Char('k') => self.lists[current].select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.lists[current].select_next(len),
            KeyCode::Home => self.lists[current].select_first(),
            KeyCode::End => self.lists[current].select_last(len),
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    fn switch_tab(&mut self, tab: CatalogTab) {
        if tab != self.tab {
            tracing::debug!(from = %self.tab, to = %tab, "switch tab");
            self.tab = tab;
            self.status_message.clear();
        }
    }

    /// Tick the visible demo only
    pub fn on_tick(&mut self) {
        if let Some(demo) = self.stack.last_mut() {
            demo.on_tick();
        }
    }

    /// Resolve the selected entry and push its screen
    pub fn open_selected(&mut self) {
        let Some(destination) = self.selected_destination() else {
            return;
        };
        if destination.is_placeholder() {
            tracing::warn!(
                title = destination.title(),
                "no screen for entry, showing placeholder"
            );
            self.status_message = format!("{} has no screen yet", destination.title());
        } else {
            tracing::debug!(
                route = destination.route().map(Route::name),
                "resolved destination"
            );
            self.status_message.clear();
        }
        self.push(demos::open(&destination, &self.ctx));
    }

    fn push(&mut self, demo: Box<dyn Demo>) {
        tracing::debug!(title = demo.title(), depth = self.stack.len() + 1, "push demo");
        self.stack.push(demo);
    }

    fn pop(&mut self) {
        if let Some(demo) = self.stack.pop() {
            tracing::debug!(title = demo.title(), depth = self.stack.len(), "pop demo");
            self.status_message.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let catalogs = Catalogs::builtin().expect("builtin catalogs");
        App::new(catalogs, &Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_q_inside_demo_goes_to_demo_first() {
        let mut app = app();
        app.tab = CatalogTab::Utilities;
        // Key Events consumes every key
        let index = app
            .catalogs
            .utilities
            .iter()
            .position(|e| e.title == "Key Events")
            .expect("key events entry");
        for _ in 0..index {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_title(), Some("Key Events"));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.depth(), 0);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
