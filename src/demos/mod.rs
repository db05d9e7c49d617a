//! Demo screens
//!
//! Each destination in the catalog is a self-contained [`Demo`] with its own
//! local state. Demos are created when opened and dropped when the user
//! navigates back, which also ends any timer-driven animation: only the
//! visible demo receives [`Demo::on_tick`].
//!
//! # Layout
//!
//! - [`controls`]: basic controls, layout, collections, indicators, media, styling
//! - [`charts`]: line, bar, sparkline and scatter charts plus the [`charts::series`] window
//! - [`state`]: state-management patterns
//! - [`utilities`]: stopwatch, uploads, palette, key events
//! - [`link`]: developer resource pages
//! - [`placeholder`]: fallback for entries without a screen

pub mod charts;
pub mod controls;
pub mod link;
pub mod placeholder;
pub mod state;
pub mod utilities;

use crate::catalog::{Destination, Route};
use crate::config::Config;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};
use std::time::Duration;

/// A key hint shown in the status bar: (keys, action)
pub type Hint = (&'static str, &'static str);

/// A single example screen
pub trait Demo {
    fn title(&self) -> &str;

    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Returns `true` when the key was consumed
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let _ = key;
        false
    }

    /// Called once per tick while the demo is visible
    fn on_tick(&mut self) {}

    fn hints(&self) -> &'static [Hint] {
        &[]
    }
}

/// Settings shared by all demos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoContext {
    pub seed: u64,
    pub tick_rate: Duration,
    pub chart_window: usize,
}

impl Default for DemoContext {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for DemoContext {
    fn from(config: &Config) -> Self {
        DemoContext {
            seed: config.demos.seed,
            tick_rate: config.ui.tick_rate(),
            chart_window: config.demos.chart_window,
        }
    }
}

/// Build the screen for a destination
pub fn open(destination: &Destination, ctx: &DemoContext) -> Box<dyn Demo> {
    match destination {
        Destination::Placeholder(p) => Box::new(placeholder::PlaceholderDemo::new(p.clone())),
        Destination::Screen { title, route } => open_route(title, *route, ctx),
    }
}

fn open_route(title: &str, route: Route, ctx: &DemoContext) -> Box<dyn Demo> {
    use charts::*;
    use controls::*;
    use state::*;
    use utilities::*;

    let title = title.to_string();
    match route {
        Route::Text => Box::new(TextDemo::new(title)),
        Route::Buttons => Box::new(ButtonsDemo::new(title)),
        Route::Toggles => Box::new(TogglesDemo::new(title)),
        Route::Sliders => Box::new(SlidersDemo::new(title)),
        Route::TextField => Box::new(TextFieldDemo::new(title)),
        Route::Picker => Box::new(PickerDemo::new(title)),
        Route::Stacks => Box::new(StacksDemo::new(title)),
        Route::Grid => Box::new(GridDemo::new(title)),
        Route::List => Box::new(ListDemo::new(title)),
        Route::Table => Box::new(TableDemo::new(title)),
        Route::Tabs => Box::new(TabsDemo::new(title)),
        Route::Progress => Box::new(ProgressDemo::new(title)),
        Route::Gauge => Box::new(GaugeDemo::new(title, ctx.seed)),
        Route::Badge => Box::new(BadgeDemo::new(title)),
        Route::LineChart => Box::new(LineChartDemo::new(title, ctx)),
        Route::BarChart => Box::new(BarChartDemo::new(title, ctx.seed)),
        Route::Sparkline => Box::new(SparklineDemo::new(title, ctx)),
        Route::Scatter => Box::new(ScatterDemo::new(title, ctx.seed)),
        Route::VideoPlayer => Box::new(VideoPlayerDemo::new(title, ctx.tick_rate)),
        Route::Modifiers => Box::new(ModifiersDemo::new(title)),
        Route::LocalState => Box::new(LocalStateDemo::new(title)),
        Route::Binding => Box::new(BindingDemo::new(title)),
        Route::SharedStore => Box::new(SharedStoreDemo::new(title)),
        Route::DerivedState => Box::new(DerivedStateDemo::new(title)),
        Route::Environment => Box::new(EnvironmentDemo::new(title)),
        Route::Stopwatch => Box::new(StopwatchDemo::new(title, ctx.tick_rate)),
        Route::Upload => Box::new(UploadDemo::new(title, ctx.seed)),
        Route::Palette => Box::new(PaletteDemo::new(title)),
        Route::KeyEvents => Box::new(KeyEventsDemo::new(title)),
        Route::Link { url } => Box::new(link::LinkDemo::new(title, url)),
    }
}

/// Bordered block with a padded title, used by every demo
pub(crate) fn panel(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(crate::ui::theme::DEFAULT_THEME.border(focused))
}

pub(crate) fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(crate::ui::theme::DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    )
}
