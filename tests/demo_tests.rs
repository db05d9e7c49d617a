// Every catalog entry opens a demo that renders and ticks without panicking

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tui_gallery::catalog::builtin::Catalogs;
use tui_gallery::catalog::{CatalogStore, Category, Destination, Placeholder};
use tui_gallery::demos::{self, Demo, DemoContext};

fn destinations<C: Category>(store: &CatalogStore<C>) -> Vec<(&'static str, Destination)> {
    store
        .iter()
        .map(|entry| (entry.title, store.destination(entry)))
        .collect()
}

fn all_destinations() -> Vec<(&'static str, Destination)> {
    let catalogs = Catalogs::builtin().expect("builtin catalogs");
    let mut all = destinations(&catalogs.controls);
    all.extend(destinations(&catalogs.state));
    all.extend(destinations(&catalogs.utilities));
    all.extend(destinations(&catalogs.resources));
    all
}

fn render(demo: &mut dyn Demo, width: u16, height: u16) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|f| {
            let area = f.area();
            demo.render(f, area);
        })
        .expect("draw");
}

#[test]
fn test_every_entry_opens_with_its_title() {
    let ctx = DemoContext::default();
    for (title, destination) in all_destinations() {
        let demo = demos::open(&destination, &ctx);
        assert_eq!(demo.title(), title);
    }
}

#[test]
fn test_every_demo_renders_and_ticks() {
    let ctx = DemoContext::default();
    for (title, destination) in all_destinations() {
        let mut demo = demos::open(&destination, &ctx);
        render(demo.as_mut(), 100, 30);
        for _ in 0..50 {
            demo.on_tick();
        }
        render(demo.as_mut(), 100, 30);
        // Cramped terminals must not panic either
        render(demo.as_mut(), 20, 5);
        assert!(!demo.title().is_empty(), "{} lost its title", title);
    }
}

#[test]
fn test_demos_survive_key_mashing() {
    let ctx = DemoContext::default();
    let keys = [
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Enter,
        KeyCode::Backspace,
        KeyCode::Tab,
        KeyCode::Char(' '),
        KeyCode::Char('r'),
        KeyCode::Char('+'),
        KeyCode::Char('-'),
        KeyCode::Char('x'),
    ];
    for (_, destination) in all_destinations() {
        let mut demo = demos::open(&destination, &ctx);
        for _ in 0..3 {
            for code in keys {
                demo.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
                demo.on_tick();
            }
        }
        render(demo.as_mut(), 80, 24);
    }
}

#[test]
fn test_placeholder_is_generic() {
    let ctx = DemoContext::default();
    let destination = Destination::Placeholder(Placeholder::new("Unregistered Topic"));
    let mut demo = demos::open(&destination, &ctx);
    assert_eq!(demo.title(), "Unregistered Topic");
    assert!(!demo.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    assert!(demo.hints().is_empty());
}
