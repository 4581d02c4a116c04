//! XDG Base Directory paths for folio.
//!
//! Command-line tools resolve config through XDG paths on every platform,
//! the same way gh, docker and kubectl do.

use std::path::PathBuf;

/// File name of the guard configuration inside [`config_dir`]
pub const GUARD_CONFIG_FILE: &str = "guard.toml";

/// Get the folio config directory.
///
/// Returns `$XDG_CONFIG_HOME/folio` if set, otherwise `~/.config/folio`.
///
/// # Examples
///
/// ```
/// use folio_paths::config_dir;
///
/// let config = config_dir();
/// assert!(config.ends_with("folio"));
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("folio")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/folio")
    } else {
        PathBuf::from(".config/folio")
    }
}

/// Path of the guard configuration file.
pub fn guard_config_path() -> PathBuf {
    config_dir().join(GUARD_CONFIG_FILE)
}
