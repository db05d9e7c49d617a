//! Closed set of destination screens

/// Every screen the gallery knows how to open.
///
/// Entries reference a route directly instead of being matched by title at
/// navigation time, so adding a variant without a demo is a compile error in
/// [`crate::demos::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    // Controls
    Text,
    Buttons,
    Toggles,
    Sliders,
    TextField,
    Picker,
    Stacks,
    Grid,
    List,
    Table,
    Tabs,
    Progress,
    Gauge,
    Badge,
    LineChart,
    BarChart,
    Sparkline,
    Scatter,
    VideoPlayer,
    Modifiers,

    // State management
    LocalState,
    Binding,
    SharedStore,
    DerivedState,
    Environment,

    // Utilities
    Stopwatch,
    Upload,
    Palette,
    KeyEvents,

    // Resources
    Link { url: &'static str },
}

impl Route {
    /// Short machine name, used in log lines
    pub fn name(self) -> &'static str {
        match self {
            Route::Text => "text",
            Route::Buttons => "buttons",
            Route::Toggles => "toggles",
            Route::Sliders => "sliders",
            Route::TextField => "text-field",
            Route::Picker => "picker",
            Route::Stacks => "stacks",
            Route::Grid => "grid",
            Route::List => "list",
            Route::Table => "table",
            Route::Tabs => "tabs",
            Route::Progress => "progress",
            Route::Gauge => "gauge",
            Route::Badge => "badge",
            Route::LineChart => "line-chart",
            Route::BarChart => "bar-chart",
            Route::Sparkline => "sparkline",
            Route::Scatter => "scatter",
            Route::VideoPlayer => "video-player",
            Route::Modifiers => "modifiers",
            Route::LocalState => "local-state",
            Route::Binding => "binding",
            Route::SharedStore => "shared-store",
            Route::DerivedState => "derived-state",
            Route::Environment => "environment",
            Route::Stopwatch => "stopwatch",
            Route::Upload => "upload",
            Route::Palette => "palette",
            Route::KeyEvents => "key-events",
            Route::Link { .. } => "link",
        }
    }

    /// Whether the destination animates on ticks
    pub fn is_timer_driven(self) -> bool {
        matches!(
            self,
            Route::Progress
                | Route::Gauge
                | Route::LineChart
                | Route::Sparkline
                | Route::VideoPlayer
                | Route::Stopwatch
                | Route::Upload
        )
    }
}
