//! Content sanitization for markup entering a live document
//!
//! This module provides:
//! - The static tag/attribute/scheme whitelist
//! - A whitelist tree walk that flattens or drops everything else
//! - Paste fast path, advisory danger check and entity escaping
//!
//! The parsed tree is scratch state owned by a single call.

mod sanitizer;
mod tree;
pub mod whitelist;

pub use sanitizer::{ContentSanitizer, SanitizeOptions, escape};
