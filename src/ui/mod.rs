//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, the navigation stack
//!   of open demos and the tick clock
//! - **[`panes`]**: render functions for the catalog list, tab bar and status bar
//! - **[`theme`]**: centralized color palette used by panes and demos
//!
//! The entry point for consumers is [`App`]: construct it with the built
//! [`Catalogs`] and the loaded [`Config`], then call [`App::run`].
//!
//! [`Catalogs`]: crate::catalog::builtin::Catalogs
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
