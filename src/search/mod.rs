//! Search and filtering over the content collection.
//!
//! # Modules
//!
//! - [`fuzzy`]: Typo-tolerant approximate substring scoring
//! - [`index`]: Weighted per-field [`SearchIndex`]
//! - [`filter`]: Tag intersection, text filter and pagination ([`compute`])

pub mod filter;
pub mod fuzzy;
pub mod index;

pub use filter::{compute, ResultPage};
pub use index::{SearchField, SearchIndex, DEFAULT_FUZZINESS};
