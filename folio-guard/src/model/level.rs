//! Access and protection tiers
//!
//! [`AccessLevel`] is the document-scope capability tier, [`ProtectionLevel`]
//! the block-scope override tier.

use serde::{Deserialize, Serialize};

use crate::error::PermissionError;

/// Document-scope capability tier
///
/// Ordered so that `Owner > Editor > Commenter > Reader > None`; every tier
/// includes the capabilities of the tiers below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    None = 0,
    Reader = 1,
    Commenter = 2,
    Editor = 3,
    Owner = 4,
}

impl Default for AccessLevel {
    fn default() -> Self {
        Self::None
    }
}

impl AccessLevel {
    /// Get string representation for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Reader => "reader",
            Self::Commenter => "commenter",
            Self::Editor => "editor",
            Self::Owner => "owner",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccessLevel {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "reader" => Ok(Self::Reader),
            "commenter" => Ok(Self::Commenter),
            "editor" => Ok(Self::Editor),
            "owner" => Ok(Self::Owner),
            _ => Err(PermissionError::unknown_access_level(s)),
        }
    }
}

/// Block-scope protection tier
///
/// Stored values that are not recognized survive as [`ProtectionLevel::Unknown`]
/// so that checks can reject them instead of failing to load the block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProtectionLevel {
    None,
    ReadOnly,
    AdminOnly,
    Unknown(String),
}

impl Default for ProtectionLevel {
    fn default() -> Self {
        Self::ReadOnly
    }
}

impl ProtectionLevel {
    /// Get string representation for storage
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::ReadOnly => "read-only",
            Self::AdminOnly => "admin-only",
            Self::Unknown(raw) => raw,
        }
    }
}

impl std::fmt::Display for ProtectionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ProtectionLevel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "none" => Self::None,
            "read-only" => Self::ReadOnly,
            "admin-only" => Self::AdminOnly,
            _ => Self::Unknown(s),
        }
    }
}

impl From<&str> for ProtectionLevel {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ProtectionLevel> for String {
    fn from(level: ProtectionLevel) -> Self {
        match level {
            ProtectionLevel::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
