//! Error types for folio-guard
//!
//! Every authorization failure is a [`PermissionError`] carrying a stable,
//! machine-readable [`PermissionCode`] plus structured details. Hosts match on
//! the code, never on the message text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// An error that carries a stable machine-readable code
pub trait CodedError: std::error::Error {
    /// Stable code, suitable for wire formats and UI lookup tables
    fn code(&self) -> &'static str;
}

/// Machine-readable permission failure codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionCode {
    NoReadAccess,
    NoEditAccess,
    NoDeleteAccess,
    NoCommentAccess,
    NoPermissionManageAccess,
    UnknownAccessLevel,
    BlockProtected,
    BlockAdminOnly,
    UnknownProtectionLevel,
    NotOwner,
}

impl PermissionCode {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoReadAccess => "NO_READ_ACCESS",
            Self::NoEditAccess => "NO_EDIT_ACCESS",
            Self::NoDeleteAccess => "NO_DELETE_ACCESS",
            Self::NoCommentAccess => "NO_COMMENT_ACCESS",
            Self::NoPermissionManageAccess => "NO_PERMISSION_MANAGE_ACCESS",
            Self::UnknownAccessLevel => "UNKNOWN_ACCESS_LEVEL",
            Self::BlockProtected => "BLOCK_PROTECTED",
            Self::BlockAdminOnly => "BLOCK_ADMIN_ONLY",
            Self::UnknownProtectionLevel => "UNKNOWN_PROTECTION_LEVEL",
            Self::NotOwner => "NOT_OWNER",
        }
    }
}

impl std::fmt::Display for PermissionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A denied permission check
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct PermissionError {
    pub message: String,
    pub code: PermissionCode,
    #[serde(default)]
    pub details: Map<String, Value>,
}

impl PermissionError {
    /// Create an error with no details
    pub fn new(code: PermissionCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            details: Map::new(),
        }
    }

    /// Attach a detail entry
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    /// Look up a string detail
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }

    pub fn no_read_access(document_id: &str) -> Self {
        Self::new(
            PermissionCode::NoReadAccess,
            "You do not have permission to read this document",
        )
        .with_detail("documentId", document_id)
    }

    pub fn no_edit_access(document_id: &str) -> Self {
        Self::new(
            PermissionCode::NoEditAccess,
            "You do not have permission to edit this document",
        )
        .with_detail("documentId", document_id)
    }

    pub fn no_delete_access(document_id: &str) -> Self {
        Self::new(
            PermissionCode::NoDeleteAccess,
            "Only the document owner can delete this document",
        )
        .with_detail("documentId", document_id)
    }

    pub fn no_comment_access(document_id: &str) -> Self {
        Self::new(
            PermissionCode::NoCommentAccess,
            "You do not have permission to comment on this document",
        )
        .with_detail("documentId", document_id)
    }

    pub fn no_permission_manage_access(document_id: &str) -> Self {
        Self::new(
            PermissionCode::NoPermissionManageAccess,
            "Only the document owner can manage permissions",
        )
        .with_detail("documentId", document_id)
    }

    pub fn unknown_access_level(level: &str) -> Self {
        Self::new(
            PermissionCode::UnknownAccessLevel,
            format!("Unknown access level: {}", level),
        )
        .with_detail("level", level)
    }

    pub fn block_protected(block_id: &str, action: &str) -> Self {
        Self::new(
            PermissionCode::BlockProtected,
            format!("This block is protected and cannot be {}", past_tense(action)),
        )
        .with_detail("blockId", block_id)
        .with_detail("action", action)
    }

    pub fn block_admin_only(block_id: &str, action: &str) -> Self {
        Self::new(
            PermissionCode::BlockAdminOnly,
            format!("Only administrators can {} this block", action),
        )
        .with_detail("blockId", block_id)
        .with_detail("action", action)
    }

    pub fn unknown_protection_level(block_id: &str, level: &str) -> Self {
        Self::new(
            PermissionCode::UnknownProtectionLevel,
            format!("Unknown protection level: {}", level),
        )
        .with_detail("blockId", block_id)
        .with_detail("level", level)
    }

    pub fn not_owner(document_id: &str) -> Self {
        Self::new(
            PermissionCode::NotOwner,
            "Only the document owner can change block protection",
        )
        .with_detail("documentId", document_id)
    }
}

impl CodedError for PermissionError {
    fn code(&self) -> &'static str {
        self.code.as_str()
    }
}

fn past_tense(action: &str) -> String {
    match action {
        "edit" => "edited".to_string(),
        "delete" => "deleted".to_string(),
        "move" => "moved".to_string(),
        "duplicate" => "duplicated".to_string(),
        other => format!("used for '{}'", other),
    }
}

/// Top-level error type for folio-guard
#[derive(Debug, Error)]
pub enum GuardError {
    #[error(transparent)]
    Permission(#[from] PermissionError),

    #[error("Config load error: {0}")]
    ConfigLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodedError for GuardError {
    fn code(&self) -> &'static str {
        match self {
            Self::Permission(err) => err.code.as_str(),
            Self::ConfigLoad(_) => "CONFIG_LOAD",
            Self::Io(_) => "IO",
        }
    }
}

pub type PermissionResult<T> = Result<T, PermissionError>;
pub type GuardResult<T> = Result<T, GuardError>;
