//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides path handling for native hosts: the platform data
//! directory where the CLI keeps its storage slot, and tilde expansion for
//! user-supplied paths.

pub mod paths;

pub use paths::{default_slot_path, expand_tilde, get_data_dir};
