// Integration tests for the catalog store and the builtin catalogs

use ratatui::{backend::TestBackend, Terminal};
use std::collections::HashSet;
use tui_gallery::catalog::builtin::{Catalogs, CatalogTab, UNROUTED_TITLES};
use tui_gallery::catalog::{entry, CatalogStore, Category, Destination, Placeholder, Route};
use tui_gallery::error::CatalogError;
use tui_gallery::ui::panes::catalog_list::{render_catalog_list, CatalogListState, EMPTY_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Topic {
    Layout,
    Input,
    Motion,
}

impl Category for Topic {
    const ALL: &'static [Self] = &[Topic::Layout, Topic::Input, Topic::Motion];

    fn title(self) -> &'static str {
        match self {
            Topic::Layout => "Layout",
            Topic::Input => "Input",
            Topic::Motion => "Motion",
        }
    }

    fn icon(self) -> &'static str {
        "•"
    }
}

fn sample_store() -> CatalogStore<Topic> {
    CatalogStore::builder()
        .section(
            Topic::Input,
            [
                entry("Button", "Press me", Route::Buttons),
                entry("Unregistered Topic", "No screen", None),
            ],
        )
        .section(Topic::Layout, [entry("Grid", "Cells", Route::Grid)])
        .build()
        .expect("sample store")
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_populated_categories_have_entries() {
    let store = sample_store();
    for category in store.categories() {
        assert!(!store.entries(category).is_empty());
    }
    assert!(store.entries(Topic::Motion).is_empty());
}

#[test]
fn test_category_order_is_stable_and_sorted() {
    let store = sample_store();
    let first = store.categories();
    assert_eq!(first, vec![Topic::Layout, Topic::Input]);
    for _ in 0..5 {
        assert_eq!(store.categories(), first);
    }
}

#[test]
fn test_routed_entry_resolves_to_screen() {
    let store = sample_store();
    let button = store.find("Button").expect("button entry");
    assert_eq!(
        store.destination(button),
        Destination::Screen {
            title: "Button".to_string(),
            route: Route::Buttons
        }
    );
}

#[test]
fn test_unregistered_topic_resolves_to_placeholder() {
    let store = sample_store();
    let unregistered = store.find("Unregistered Topic").expect("entry");
    let destination = store.destination(unregistered);
    assert_eq!(
        destination,
        Destination::Placeholder(Placeholder::new("Unregistered Topic"))
    );
    assert_eq!(destination.title(), "Unregistered Topic");
    assert_eq!(destination, store.destination(unregistered));
}

#[test]
fn test_unknown_title_resolves_to_placeholder() {
    let store = sample_store();
    let destination = store.resolve("Nowhere");
    assert!(destination.is_placeholder());
    assert_eq!(destination.title(), "Nowhere");
}

#[test]
fn test_same_category_keeps_insertion_order() {
    let store = sample_store();
    let titles: Vec<&str> = store.entries(Topic::Input).iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["Button", "Unregistered Topic"]);
    assert_ne!(
        store.entries(Topic::Input)[0].id,
        store.entries(Topic::Input)[1].id
    );
}

#[test]
fn test_duplicate_category_is_rejected() {
    let result = CatalogStore::builder()
        .section(Topic::Layout, [entry("Grid", "Cells", Route::Grid)])
        .section(Topic::Layout, [entry("Stacks", "Rows", Route::Stacks)])
        .build();
    assert!(matches!(result, Err(CatalogError::DuplicateCategory { .. })));
}

#[test]
fn test_duplicate_title_is_rejected() {
    let result = CatalogStore::builder()
        .section(Topic::Layout, [entry("Grid", "Cells", Route::Grid)])
        .section(Topic::Input, [entry("Grid", "Again", None)])
        .build();
    assert!(matches!(result, Err(CatalogError::DuplicateTitle { .. })));
}

#[test]
fn test_empty_store_renders_no_sections() {
    let store: CatalogStore<Topic> = CatalogStore::builder().build().expect("empty store");
    assert!(store.categories().is_empty());

    let mut terminal = Terminal::new(TestBackend::new(60, 10)).expect("terminal");
    let mut state = CatalogListState::default();
    let mut rows = usize::MAX;
    terminal
        .draw(|f| {
            let area = f.area();
            rows = render_catalog_list(f, area, &store, &mut state, true);
        })
        .expect("draw");
    assert_eq!(rows, 0);
    assert!(buffer_text(&terminal).contains(EMPTY_MESSAGE));
    assert!(state.selected_entry(&store).is_none());
}

#[test]
fn test_list_renders_one_row_per_entry_plus_headers() {
    let store = sample_store();
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("terminal");
    let mut state = CatalogListState::default();
    let mut rows = 0;
    terminal
        .draw(|f| {
            let area = f.area();
            rows = render_catalog_list(f, area, &store, &mut state, false);
        })
        .expect("draw");
    assert_eq!(rows, 2 + store.len());
    let text = buffer_text(&terminal);
    assert!(text.contains("Layout"));
    assert!(text.contains("Unregistered Topic"));
}

#[test]
fn test_builtin_catalogs_build() {
    let catalogs = Catalogs::builtin().expect("builtin catalogs");
    for tab in CatalogTab::ALL {
        assert!(catalogs.len(tab) > 0, "{} is empty", tab);
    }
    assert_eq!(
        catalogs.total(),
        CatalogTab::ALL.iter().map(|&t| catalogs.len(t)).sum::<usize>()
    );
}

#[test]
fn test_builtin_placeholders_match_allow_list() {
    let catalogs = Catalogs::builtin().expect("builtin catalogs");
    let mut placeholders = catalogs.placeholder_titles();
    placeholders.sort_unstable();
    let mut expected = UNROUTED_TITLES.to_vec();
    expected.sort_unstable();
    assert_eq!(placeholders, expected);
}

#[test]
fn test_titles_unique_across_tabs() {
    let catalogs = Catalogs::builtin().expect("builtin catalogs");
    let mut seen = HashSet::new();
    let titles = catalogs
        .controls
        .iter()
        .map(|e| e.title)
        .chain(catalogs.state.iter().map(|e| e.title))
        .chain(catalogs.utilities.iter().map(|e| e.title))
        .chain(catalogs.resources.iter().map(|e| e.title));
    for title in titles {
        assert!(seen.insert(title), "duplicate title {}", title);
    }
}

#[test]
fn test_every_route_is_reachable_from_builtin() {
    let catalogs = Catalogs::builtin().expect("builtin catalogs");
    let names: HashSet<&str> = catalogs
        .controls
        .iter()
        .filter_map(|e| e.route)
        .chain(catalogs.state.iter().filter_map(|e| e.route))
        .chain(catalogs.utilities.iter().filter_map(|e| e.route))
        .chain(catalogs.resources.iter().filter_map(|e| e.route))
        .map(Route::name)
        .collect();
    assert_eq!(names.len(), 30);
}
