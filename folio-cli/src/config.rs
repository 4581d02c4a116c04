//! Guard config resolution for the CLI

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_guard::GuardConfig;
use folio_guard::config::{load_config_from_file, validate_config};

/// Config file in effect: the explicit path, else the XDG default
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(folio_paths::guard_config_path)
}

/// Load and validate the guard config
///
/// A missing default file means defaults; a missing explicit file is an error.
pub fn load(explicit: Option<&Path>) -> Result<GuardConfig> {
    let path = config_path(explicit);
    if explicit.is_none() && !path.exists() {
        tracing::debug!(path = %path.display(), "No guard config, using defaults");
        return Ok(GuardConfig::default());
    }

    let config = load_config_from_file(&path)?;
    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/custom-guard.toml");
        assert_eq!(config_path(Some(&path)), path);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sanitizer]\nallow_images = false").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert!(!config.sanitizer.allow_images);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        assert!(load(Some(Path::new("/nonexistent/guard.toml"))).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sanitizer]\nadditional_tags = [\"script\"]").unwrap();

        assert!(load(Some(file.path())).is_err());
    }
}
