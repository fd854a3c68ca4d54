//! Presentation layer: view models and text rendering.
//!
//! The engine does not draw anything itself. [`viewmodel`] projects the list
//! state into display-ready data for any host; [`renderer`] turns that data
//! into terminal text for the CLI.
//!
//! # Modules
//!
//! - [`viewmodel`]: Serializable result view (items, highlights, tag chips, pagination)
//! - [`renderer`]: Plain or ANSI text output

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, TextStyle};
pub use viewmodel::{EmptyState, ItemView, PaginationInfo, ResultView, TagChip};
