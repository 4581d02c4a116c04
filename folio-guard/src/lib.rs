//! folio-guard: content and access control for the folio collaborative editor
//!
//! This crate provides the two safety layers that sit in front of every
//! document mutation:
//!
//! - **Sanitization** - [`ContentSanitizer`] turns untrusted HTML into markup
//!   that is safe to attach to a live document
//! - **Document access** - [`PermissionManager`] resolves an actor's
//!   [`AccessLevel`] and guards document actions
//! - **Block protection** - [`BlockProtection`] layers per-block
//!   [`ProtectionLevel`] overrides on top of document access
//!
//! Every denial is a [`PermissionError`] with a stable [`PermissionCode`].
//!
//! # Quick Start
//!
//! ```
//! use folio_guard::{BlockProtection, ContentSanitizer, Document, SanitizeOptions, StaticActor};
//!
//! let sanitizer = ContentSanitizer::default();
//! let safe = sanitizer.sanitize("<p onclick=\"x()\">hi</p>", &SanitizeOptions::default());
//! assert_eq!(safe, "<p>hi</p>");
//!
//! let document: Document = serde_json::from_str(
//!     r#"{"id": "d1", "ownerId": "u1", "permissions": {"editors": ["u2"]}}"#,
//! )
//! .unwrap();
//! let guard = BlockProtection::with_context(StaticActor::user("u2"));
//! assert!(guard.permissions().can_edit_document(&document).is_ok());
//! ```

pub mod access;
pub mod config;
pub mod error;
pub mod model;
pub mod protection;
pub mod sanitize;

// Re-export key types for convenience
pub use access::{
    Actor, ActorContext, Capabilities, DocumentAction, PermissionManager, StaticActor,
};
pub use config::{GuardConfig, SanitizerConfig};
pub use error::{
    CodedError, GuardError, GuardResult, PermissionCode, PermissionError, PermissionResult,
};
pub use model::{AccessLevel, Author, Block, Document, DocumentPermissions, ProtectionLevel};
pub use protection::BlockProtection;
pub use sanitize::{ContentSanitizer, SanitizeOptions, escape};
