//! Records the guards evaluate
//!
//! Documents and blocks are owned by the host store; this crate reads them and
//! performs the few owner-gated in-place edits the guards allow.

mod block;
mod document;
mod level;

pub use block::Block;
pub use document::{Author, Document, DocumentPermissions};
pub use level::{AccessLevel, ProtectionLevel};
