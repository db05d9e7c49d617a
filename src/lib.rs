//! # Introduction
//!
//! tui-gallery is a navigable terminal catalog of UI demos built with
//! [ratatui](https://docs.rs/ratatui).  Four tabs (Controls, State,
//! Utilities, Resources) each list entries grouped by category; selecting an
//! entry opens its demo screen, and entries without a screen open a generic
//! "Not implemented yet" placeholder.
//!
//! ## Flow
//!
//! ```text
//! Config → Catalogs → App → (entry → Destination → Demo)
//! ```
//!
//! 1. [`config`]: TOML settings with defaults, looked up via `dirs`.
//! 2. [`catalog`]: the [`catalog::CatalogStore`] model and the compiled-in
//!    [`catalog::builtin::Catalogs`].
//! 3. [`demos`]: the [`demos::Demo`] trait and every demo screen, opened
//!    through an exhaustive match over [`catalog::Route`].
//! 4. [`ui`]: ratatui-based TUI; the event loop, navigation stack and panes.
//! 5. [`logging`] and [`error`]: file-backed `tracing` output and the crate
//!    error types.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod demos;
pub mod error;
pub mod logging;
pub mod ui;
