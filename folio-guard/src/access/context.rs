//! Actor context supplied by the host's session layer

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The user on whose behalf a check runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Actor {
    /// Create an actor with no display name
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Source of the current actor and their admin status
///
/// Both methods are called on every check and their results are never cached,
/// so an implementation may reflect session changes immediately.
pub trait ActorContext {
    fn current_user(&self) -> Actor;
    fn is_admin(&self) -> bool;
}

impl<C: ActorContext + ?Sized> ActorContext for &C {
    fn current_user(&self) -> Actor {
        (**self).current_user()
    }

    fn is_admin(&self) -> bool {
        (**self).is_admin()
    }
}

impl<C: ActorContext + ?Sized> ActorContext for Arc<C> {
    fn current_user(&self) -> Actor {
        (**self).current_user()
    }

    fn is_admin(&self) -> bool {
        (**self).is_admin()
    }
}

/// Fixed actor, for per-request contexts and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticActor {
    actor: Actor,
    admin: bool,
}

impl StaticActor {
    /// A regular (non-admin) user
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            actor: Actor::new(id),
            admin: false,
        }
    }

    /// An administrator
    pub fn admin(id: impl Into<String>) -> Self {
        Self {
            actor: Actor::new(id),
            admin: true,
        }
    }

    /// Use a fully specified actor
    pub fn from_actor(actor: Actor, admin: bool) -> Self {
        Self { actor, admin }
    }
}

impl ActorContext for StaticActor {
    fn current_user(&self) -> Actor {
        self.actor.clone()
    }

    fn is_admin(&self) -> bool {
        self.admin
    }
}
