//! Document access control
//!
//! This module provides:
//! - Actor context supplied by the host session layer
//! - Access level resolution with owner/admin/list precedence
//! - Throw-or-allow guards for document actions

mod capabilities;
mod context;
mod manager;

pub use capabilities::{Capabilities, DocumentAction};
pub use context::{Actor, ActorContext, StaticActor};
pub use manager::PermissionManager;
