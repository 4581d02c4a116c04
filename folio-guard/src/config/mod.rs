//! Guard configuration
//!
//! Provides the TOML schema and file loading.

mod loader;
mod schema;

pub use loader::{load_config_from_file, load_config_or_default, parse_config, validate_config};
pub use schema::{DEFAULT_BASE_URL, GuardConfig, SanitizerConfig};
