//! Storage layer for the persisted list state.
//!
//! The list engine remembers the last query, tag selection and page between
//! visits. This module provides the durable key/value port, its in-memory and
//! JSON file implementations, and the [`PersistedStore`] that maps
//! [`ListState`](crate::ListState) to and from the stored JSON object.
//!
//! # Modules
//!
//! - `backend`: [`StorageSlot`] trait abstraction for slot implementations
//! - `memory`: In-memory slot with fault injection
//! - `json`: JSON file-based slot with atomic writes
//! - `persisted`: Field-level recovering reads, best-effort writes

pub mod backend;
pub mod json;
pub mod memory;
pub mod persisted;

pub use backend::StorageSlot;
pub use json::JsonFileSlot;
pub use memory::MemorySlot;
pub use persisted::{PersistedStore, DEFAULT_STORAGE_KEY};
