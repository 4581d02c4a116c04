//! Config loading from TOML files
//!
//! Provides file-based config loading with validation.

use std::path::Path;

use url::Url;

use super::GuardConfig;
use crate::error::{GuardError, GuardResult};
use crate::sanitize::whitelist;

/// Load config from a TOML file
pub fn load_config_from_file(path: impl AsRef<Path>) -> GuardResult<GuardConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        GuardError::ConfigLoad(format!("failed to read config file {:?}: {}", path, e))
    })?;

    parse_config(&content)
}

/// Parse config from TOML string
pub fn parse_config(toml_content: &str) -> GuardResult<GuardConfig> {
    toml::from_str(toml_content)
        .map_err(|e| GuardError::ConfigLoad(format!("invalid config TOML: {}", e)))
}

/// Load config with fallback to default
pub fn load_config_or_default(path: impl AsRef<Path>) -> GuardConfig {
    let path = path.as_ref();
    match load_config_from_file(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Using default guard config");
            GuardConfig::default()
        }
    }
}

/// Validate a config for consistency
pub fn validate_config(config: &GuardConfig) -> GuardResult<()> {
    let base = Url::parse(&config.sanitizer.base_url).map_err(|e| {
        GuardError::ConfigLoad(format!(
            "invalid sanitizer base_url '{}': {}",
            config.sanitizer.base_url, e
        ))
    })?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(GuardError::ConfigLoad(format!(
            "sanitizer base_url must be http or https, got '{}'",
            base.scheme()
        )));
    }

    let denied: Vec<&str> = config
        .sanitizer
        .additional_tags
        .iter()
        .map(String::as_str)
        .filter(|tag| whitelist::is_hard_denied(&tag.to_ascii_lowercase()))
        .collect();
    if !denied.is_empty() {
        return Err(GuardError::ConfigLoad(format!(
            "additional_tags may not include: {}",
            denied.join(", ")
        )));
    }

    Ok(())
}
