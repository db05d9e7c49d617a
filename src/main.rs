// tui-gallery: a terminal catalog of ratatui demos

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tui_gallery::catalog::builtin::Catalogs;
use tui_gallery::cli::{self, USAGE};
use tui_gallery::config::Config;
use tui_gallery::error::{GalleryError, Result};
use tui_gallery::logging;
use tui_gallery::ui::App;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        if matches!(err, GalleryError::Usage(_)) {
            eprintln!();
            eprintln!("{}", USAGE);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = cli::parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let (mut config, source) = Config::load(args.config.as_deref())?;
    if let Some(tab) = args.tab {
        config.ui.initial_tab = tab;
    }

    let log_path = logging::init(&config.logging)?;
    match &source {
        Some(path) => tracing::info!(path = %path.display(), "loaded configuration"),
        None => tracing::info!("no configuration file found, using defaults"),
    }

    let catalogs = Catalogs::builtin()?;
    tracing::info!(
        entries = catalogs.total(),
        placeholders = catalogs.placeholder_titles().len(),
        tab = %config.ui.initial_tab,
        log = %log_path.display(),
        "starting gallery"
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalogs, &config);
    let res = app.run(&mut terminal);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
    }
    tracing::info!("exiting");
    Ok(res?)
}
