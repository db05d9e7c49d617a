//! Compiled-in catalogs for the four gallery tabs

use super::{entry, Category, CatalogStore, Route};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level tab of the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogTab {
    #[default]
    Controls,
    State,
    Utilities,
    Resources,
}

impl CatalogTab {
    pub const ALL: [CatalogTab; 4] = [
        CatalogTab::Controls,
        CatalogTab::State,
        CatalogTab::Utilities,
        CatalogTab::Resources,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CatalogTab::Controls => "Controls",
            CatalogTab::State => "State",
            CatalogTab::Utilities => "Utilities",
            CatalogTab::Resources => "Resources",
        }
    }

    pub fn index(self) -> usize {
        match self {
            CatalogTab::Controls => 0,
            CatalogTab::State => 1,
            CatalogTab::Utilities => 2,
            CatalogTab::Resources => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for CatalogTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for CatalogTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "controls" => Ok(CatalogTab::Controls),
            "state" => Ok(CatalogTab::State),
            "utilities" => Ok(CatalogTab::Utilities),
            "resources" => Ok(CatalogTab::Resources),
            other => Err(format!(
                "unknown tab '{}' (expected controls, state, utilities or resources)",
                other
            )),
        }
    }
}

/// Kinds of UI control shown on the Controls tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlKind {
    Basic,
    Layout,
    Collections,
    Indicators,
    Charts,
    Media,
    Styling,
}

impl Category for ControlKind {
    const ALL: &'static [Self] = &[
        ControlKind::Basic,
        ControlKind::Layout,
        ControlKind::Collections,
        ControlKind::Indicators,
        ControlKind::Charts,
        ControlKind::Media,
        ControlKind::Styling,
    ];

    fn title(self) -> &'static str {
        match self {
            ControlKind::Basic => "Basic Controls",
            ControlKind::Layout => "Layout Controls",
            ControlKind::Collections => "Collection Views",
            ControlKind::Indicators => "Indicators",
            ControlKind::Charts => "Charts",
            ControlKind::Media => "Media",
            ControlKind::Styling => "Styling",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ControlKind::Basic => "◆",
            ControlKind::Layout => "▦",
            ControlKind::Collections => "☰",
            ControlKind::Indicators => "◔",
            ControlKind::Charts => "▁▃▅",
            ControlKind::Media => "▶",
            ControlKind::Styling => "✎",
        }
    }
}

/// State-management topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateTopic {
    Fundamentals,
    SharedState,
    DataFlow,
}

impl Category for StateTopic {
    const ALL: &'static [Self] = &[
        StateTopic::Fundamentals,
        StateTopic::SharedState,
        StateTopic::DataFlow,
    ];

    fn title(self) -> &'static str {
        match self {
            StateTopic::Fundamentals => "Fundamentals",
            StateTopic::SharedState => "Shared State",
            StateTopic::DataFlow => "Data Flow",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            StateTopic::Fundamentals => "●",
            StateTopic::SharedState => "⇄",
            StateTopic::DataFlow => "→",
        }
    }
}

/// Miscellaneous utilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UtilityKind {
    Timing,
    Transfers,
    System,
}

impl Category for UtilityKind {
    const ALL: &'static [Self] = &[UtilityKind::Timing, UtilityKind::Transfers, UtilityKind::System];

    fn title(self) -> &'static str {
        match self {
            UtilityKind::Timing => "Timing",
            UtilityKind::Transfers => "Transfers",
            UtilityKind::System => "System",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            UtilityKind::Timing => "◷",
            UtilityKind::Transfers => "⇅",
            UtilityKind::System => "⚙",
        }
    }
}

/// Developer resource groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    Documentation,
    Tutorials,
    Community,
    Tools,
}

impl Category for ResourceKind {
    const ALL: &'static [Self] = &[
        ResourceKind::Documentation,
        ResourceKind::Tutorials,
        ResourceKind::Community,
        ResourceKind::Tools,
    ];

    fn title(self) -> &'static str {
        match self {
            ResourceKind::Documentation => "Documentation",
            ResourceKind::Tutorials => "Tutorials",
            ResourceKind::Community => "Community",
            ResourceKind::Tools => "Tools",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ResourceKind::Documentation => "📖",
            ResourceKind::Tutorials => "🎓",
            ResourceKind::Community => "💬",
            ResourceKind::Tools => "🔧",
        }
    }
}

/// Titles that are expected to resolve to the placeholder screen.
///
/// Kept explicit so that an entry losing its route shows up as a test failure.
pub const UNROUTED_TITLES: &[&str] = &[
    "Date Picker",
    "Pie Chart",
    "Image",
    "Event Stream",
    "Notifications",
    "Video Course",
];

pub fn controls() -> Result<CatalogStore<ControlKind>, CatalogError> {
    CatalogStore::builder()
        .section(
            ControlKind::Basic,
            [
                entry("Text", "Styled paragraphs with alignment and wrapping", Route::Text),
                entry("Button", "Focusable buttons with a press counter", Route::Buttons),
                entry("Toggle", "Boolean switches with dependent settings", Route::Toggles),
                entry("Slider", "Bounded values adjusted with the arrow keys", Route::Sliders),
                entry("Text Field", "Single-line input with cursor editing", Route::TextField),
                entry("Picker", "Segmented choice between fixed options", Route::Picker),
                entry("Date Picker", "Calendar-based date selection", None),
            ],
        )
        .section(
            ControlKind::Layout,
            [
                entry("Stacks", "Horizontal and vertical constraint layouts", Route::Stacks),
                entry("Grid", "Cells arranged in a resizable grid", Route::Grid),
            ],
        )
        .section(
            ControlKind::Collections,
            [
                entry("List", "Sectioned list with selection and deletion", Route::List),
                entry("Table", "Sortable rows and columns", Route::Table),
                entry("Tab View", "Switching between pages of content", Route::Tabs),
            ],
        )
        .section(
            ControlKind::Indicators,
            [
                entry("Progress View", "Determinate and indeterminate progress", Route::Progress),
                entry("Gauge", "Live CPU load per core", Route::Gauge),
                entry("Badge", "Unread counters on list rows", Route::Badge),
            ],
        )
        .section(
            ControlKind::Charts,
            [
                entry("Line Chart", "Streaming stock ticker over a sliding window", Route::LineChart),
                entry("Bar Chart", "Monthly totals as vertical bars", Route::BarChart),
                entry("Sparkline", "Compact throughput history", Route::Sparkline),
                entry("Scatter Chart", "Point clusters plotted on two axes", Route::Scatter),
                entry("Pie Chart", "Proportions of a whole", None),
            ],
        )
        .section(
            ControlKind::Media,
            [
                entry("Video Player", "Playback controls with seeking", Route::VideoPlayer),
                entry("Image", "Raster images rendered in the terminal", None),
            ],
        )
        .section(
            ControlKind::Styling,
            [entry("Modifiers", "Text modifiers and border styles", Route::Modifiers)],
        )
        .build()
}

pub fn state() -> Result<CatalogStore<StateTopic>, CatalogError> {
    CatalogStore::builder()
        .section(
            StateTopic::Fundamentals,
            [
                entry("Local State", "State owned by a single screen", Route::LocalState),
                entry("Binding", "A child editing its parent's state", Route::Binding),
            ],
        )
        .section(
            StateTopic::SharedState,
            [
                entry("Shared Store", "One model observed by several views", Route::SharedStore),
                entry("Environment", "Values injected down the view tree", Route::Environment),
            ],
        )
        .section(
            StateTopic::DataFlow,
            [
                entry("Derived State", "Values computed from a single source of truth", Route::DerivedState),
                entry("Event Stream", "Reacting to asynchronous event sequences", None),
            ],
        )
        .build()
}

pub fn utilities() -> Result<CatalogStore<UtilityKind>, CatalogError> {
    CatalogStore::builder()
        .section(
            UtilityKind::Timing,
            [entry("Stopwatch", "Tick-driven timer with laps", Route::Stopwatch)],
        )
        .section(
            UtilityKind::Transfers,
            [entry("Upload Queue", "Simulated concurrent file uploads", Route::Upload)],
        )
        .section(
            UtilityKind::System,
            [
                entry("Color Palette", "The gallery's theme colors", Route::Palette),
                entry("Key Events", "Inspect incoming key presses", Route::KeyEvents),
                entry("Notifications", "Desktop notification delivery", None),
            ],
        )
        .build()
}

pub fn resources() -> Result<CatalogStore<ResourceKind>, CatalogError> {
    CatalogStore::builder()
        .section(
            ResourceKind::Documentation,
            [
                entry(
                    "Ratatui Docs",
                    "API reference for the widget library",
                    Route::Link { url: "https://docs.rs/ratatui" },
                ),
                entry(
                    "Crossterm Docs",
                    "Terminal backend: events, raw mode, screens",
                    Route::Link { url: "https://docs.rs/crossterm" },
                ),
                entry(
                    "The Rust Book",
                    "The official introduction to Rust",
                    Route::Link { url: "https://doc.rust-lang.org/book/" },
                ),
            ],
        )
        .section(
            ResourceKind::Tutorials,
            [
                entry(
                    "Ratatui Tutorials",
                    "Step-by-step guides from hello world to full apps",
                    Route::Link { url: "https://ratatui.rs/tutorials/" },
                ),
                entry("Video Course", "Screencasts on building terminal apps", None),
            ],
        )
        .section(
            ResourceKind::Community,
            [
                entry(
                    "Ratatui Forum",
                    "Questions, showcases and announcements",
                    Route::Link { url: "https://forum.ratatui.rs" },
                ),
                entry(
                    "Rust Users Forum",
                    "General help for Rust programmers",
                    Route::Link { url: "https://users.rust-lang.org" },
                ),
            ],
        )
        .section(
            ResourceKind::Tools,
            [
                entry(
                    "Awesome Ratatui",
                    "Curated list of apps and widget crates",
                    Route::Link { url: "https://github.com/ratatui/awesome-ratatui" },
                ),
                entry(
                    "Cargo Generate Templates",
                    "Project templates for new ratatui apps",
                    Route::Link { url: "https://github.com/ratatui/templates" },
                ),
            ],
        )
        .build()
}

/// The four catalogs, built once at start-up and handed to the app
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub controls: CatalogStore<ControlKind>,
    pub state: CatalogStore<StateTopic>,
    pub utilities: CatalogStore<UtilityKind>,
    pub resources: CatalogStore<ResourceKind>,
}

impl Catalogs {
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Catalogs {
            controls: controls()?,
            state: state()?,
            utilities: utilities()?,
            resources: resources()?,
        })
    }

    pub fn len(&self, tab: CatalogTab) -> usize {
        match tab {
            CatalogTab::Controls => self.controls.len(),
            CatalogTab::State => self.state.len(),
            CatalogTab::Utilities => self.utilities.len(),
            CatalogTab::Resources => self.resources.len(),
        }
    }

    pub fn total(&self) -> usize {
        CatalogTab::ALL.iter().map(|&t| self.len(t)).sum()
    }

    /// Titles resolving to the placeholder, across all tabs
    pub fn placeholder_titles(&self) -> Vec<&'static str> {
        let mut titles: Vec<&'static str> = Vec::new();
        titles.extend(self.controls.placeholders().iter().map(|e| e.title));
        titles.extend(self.state.placeholders().iter().map(|e| e.title));
        titles.extend(self.utilities.placeholders().iter().map(|e| e.title));
        titles.extend(self.resources.placeholders().iter().map(|e| e.title));
        titles
    }
}
