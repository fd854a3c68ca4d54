//! Path utilities for native hosts.
//!
//! Platform directories come from the `dirs` crate, so the storage slot lands
//! where each OS expects application data.

use std::path::PathBuf;

/// File name of the JSON storage slot inside the data directory.
pub const SLOT_FILE_NAME: &str = "state.json";

/// Returns the data directory for postlist storage.
///
/// Resolves to `<platform data dir>/postlist`, e.g. `~/.local/share/postlist`
/// on Linux or `~/Library/Application Support/postlist` on macOS. Falls back
/// to `./.postlist` when the platform reports no data directory.
///
/// # Examples
///
/// ```
/// use postlist::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("postlist") || data_dir.ends_with(".postlist"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".postlist"), |dir| dir.join("postlist"))
}

/// Default location of the CLI's storage slot file.
#[must_use]
pub fn default_slot_path() -> PathBuf {
    get_data_dir().join(SLOT_FILE_NAME)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use postlist::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// if let Some(home) = dirs::home_dir() {
///     assert_eq!(expand_tilde("~/posts.json"), home.join("posts.json"));
/// }
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (path, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}
