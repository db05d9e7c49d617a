//! Pane rendering
//!
//! # Pane Modules
//!
//! - [`catalog_list`]: grouped entry list with its selection state
//! - [`tab_bar`]: the four top-level catalogs
//! - [`status`]: breadcrumb, last message and key hints
//!
//! Each module exports a `render_*` function taking the frame, the target
//! area and borrowed state.

pub mod catalog_list;
pub mod status;
pub mod tab_bar;

pub use catalog_list::{render_catalog_list, CatalogListState};
pub use status::render_status_bar;
pub use tab_bar::render_tab_bar;
