//! Lifecycle and focus state types for the application.
//!
//! # State Machine
//!
//! A [`ListController`](crate::app::ListController) moves through three
//! phases exactly once:
//!
//! ```text
//! Uninitialized ──mount()──▶ Resolving ──write-back──▶ Steady
//! ```
//!
//! - **Uninitialized**: constructed, nothing read yet; mutations are ignored
//! - **Resolving**: URL and storage are read and merged; no user mutations
//! - **Steady**: every mutation writes out to URL and storage
//!
//! [`FocusContext`] describes where keyboard focus sits when a key arrives,
//! which decides whether global shortcuts may intercept it.
//!
//! # Example
//!
//! ```rust
//! use postlist::app::modes::{FocusContext, Phase};
//!
//! let phase = Phase::Uninitialized;
//! assert!(!phase.accepts_mutations());
//! assert!(FocusContext::Document.allows_shortcuts());
//! ```

/// Lifecycle phase of a list controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Constructed but not yet mounted.
    #[default]
    Uninitialized,

    /// Mount in progress: initial state is being resolved from URL and storage.
    Resolving,

    /// Mounted. User mutations are accepted and propagated.
    Steady,
}

impl Phase {
    /// Whether user mutations are applied in this phase.
    #[must_use]
    pub const fn accepts_mutations(self) -> bool {
        matches!(self, Self::Steady)
    }
}

/// Where keyboard focus is when a key press arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusContext {
    /// Nothing focused in particular (the page body).
    Document,

    /// The list's own search input.
    SearchInput,

    /// A non-text control belonging to the list (tag chip, pagination button).
    ListControl,

    /// Any other text-editable element (input, textarea, contenteditable).
    Editable,

    /// A control owned by another component (comment form, embedded widget).
    ForeignControl,
}

impl FocusContext {
    /// Whether global list shortcuts may intercept keys in this context.
    #[must_use]
    pub const fn allows_shortcuts(self) -> bool {
        matches!(self, Self::Document | Self::ListControl)
    }
}
