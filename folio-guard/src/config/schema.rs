//! Guard configuration schema

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::sanitize::SanitizeOptions;

/// Complete guard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuardConfig {
    #[serde(default)]
    pub sanitizer: SanitizerConfig,
}

/// Sanitizer defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    pub allow_images: bool,
    pub allow_links: bool,
    pub additional_tags: BTreeSet<String>,
    /// Base that relative `href`/`src` values are resolved against
    pub base_url: String,
}

pub const DEFAULT_BASE_URL: &str = "https://localhost/";

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            allow_images: true,
            allow_links: true,
            additional_tags: BTreeSet::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SanitizerConfig {
    /// Per-call options equivalent to these defaults
    pub fn options(&self) -> SanitizeOptions {
        SanitizeOptions {
            allow_images: self.allow_images,
            allow_links: self.allow_links,
            additional_tags: self
                .additional_tags
                .iter()
                .map(|t| t.to_ascii_lowercase())
                .collect(),
        }
    }
}
