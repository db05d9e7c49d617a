// Integration tests for navigation and rendering of the whole app

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tui_gallery::catalog::builtin::{CatalogTab, Catalogs};
use tui_gallery::catalog::Placeholder;
use tui_gallery::config::Config;
use tui_gallery::ui::App;

fn new_app() -> App {
    let catalogs = Catalogs::builtin().expect("builtin catalogs");
    App::new(catalogs, &Config::default())
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Move the selection on the current tab to `title`
fn select(app: &mut App, title: &str) {
    press(app, KeyCode::Home);
    for _ in 0..app.catalogs.len(app.tab) {
        if app.selected_title() == Some(title) {
            return;
        }
        press(app, KeyCode::Down);
    }
    assert_eq!(app.selected_title(), Some(title), "entry not found");
}

fn draw(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_starts_on_configured_tab() {
    let mut config = Config::default();
    config.ui.initial_tab = CatalogTab::Resources;
    let app = App::new(Catalogs::builtin().expect("catalogs"), &config);
    assert_eq!(app.tab, CatalogTab::Resources);
    assert_eq!(app.depth(), 0);
}

#[test]
fn test_tab_switching_wraps() {
    let mut app = new_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.tab, CatalogTab::State);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.tab, CatalogTab::Resources);
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.tab, CatalogTab::Utilities);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.tab, CatalogTab::Resources);
}

#[test]
fn test_selection_is_kept_per_tab() {
    let mut app = new_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.list_state(CatalogTab::State).selected(), 0);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.list_state(CatalogTab::Controls).selected(), 2);
}

#[test]
fn test_selection_clamps_to_catalog() {
    let mut app = new_app();
    press(&mut app, KeyCode::Up);
    assert_eq!(app.list_state(CatalogTab::Controls).selected(), 0);
    press(&mut app, KeyCode::End);
    let last = app.catalogs.len(CatalogTab::Controls) - 1;
    assert_eq!(app.list_state(CatalogTab::Controls).selected(), last);
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.list_state(CatalogTab::Controls).selected(), last);
}

#[test]
fn test_enter_opens_and_esc_returns() {
    let mut app = new_app();
    select(&mut app, "Slider");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.depth(), 1);
    assert_eq!(app.current_title(), Some("Slider"));

    // Tab keys belong to the demo while it is open
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.tab, CatalogTab::Controls);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.depth(), 0);
    assert_eq!(app.selected_title(), Some("Slider"));
}

#[test]
fn test_placeholder_entry_opens_generic_screen() {
    let mut app = new_app();
    select(&mut app, "Date Picker");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_title(), Some("Date Picker"));
    assert!(app.status_message.contains("Date Picker"));

    let screen = draw(&mut app);
    assert!(screen.contains(Placeholder::MESSAGE));
}

#[test]
fn test_q_quits_from_catalog_and_unconsuming_demo() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    let mut app = new_app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.depth(), 1);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_reopened_stopwatch_starts_fresh() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('3'));
    select(&mut app, "Stopwatch");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    for _ in 0..4 {
        app.on_tick();
    }
    assert!(draw(&mut app).contains("00:01.00"));

    press(&mut app, KeyCode::Esc);
    // Ticks on the catalog reach no demo
    for _ in 0..10 {
        app.on_tick();
    }
    press(&mut app, KeyCode::Enter);
    assert!(draw(&mut app).contains("00:00.00"));
}

#[test]
fn test_every_tab_renders() {
    let mut app = new_app();
    for tab in CatalogTab::ALL {
        press(&mut app, KeyCode::Char(char::from(b'1' + tab.index() as u8)));
        let screen = draw(&mut app);
        assert!(screen.contains(tab.title()));
    }
}

#[test]
fn test_breadcrumb_shows_open_demo() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Enter);
    let title = app.current_title().expect("demo open").to_string();
    let screen = draw(&mut app);
    assert!(screen.contains(&format!("State › {}", title)));
}
