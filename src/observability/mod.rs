//! Structured logging setup.
//!
//! The library itself only emits `tracing` spans and events. Installing a
//! subscriber is the host's choice; [`init_tracing`] is the one the CLI uses:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use postlist::observability::init_tracing;
//! use postlist::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("list engine initialized");
//! ```

mod init;

pub use init::init_tracing;
