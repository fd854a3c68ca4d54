//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host view (browser glue, CLI) and the
//! domain/search/storage layers. It owns the canonical list state and
//! implements the event-driven flow that keeps address bar, storage and the
//! rendered list in agreement.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → ListController → URL + Storage writes
//!                                             ↓
//!                              Recompute → View Model → Render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands for the host view
//! - [`controller`]: State reconciliation and mutation entry points
//! - [`handler`]: Event processing logic
//! - [`keyboard`]: Global `/` and `Escape` shortcuts
//! - [`modes`]: Lifecycle phase and focus context types

pub mod actions;
pub mod controller;
pub mod handler;
pub mod keyboard;
pub mod modes;

pub use actions::Action;
pub use controller::ListController;
pub use handler::{handle_event, Event};
pub use keyboard::{Key, KeyCommand, KeyOutcome, KeyPress, KeyboardController};
pub use modes::{FocusContext, Phase};
