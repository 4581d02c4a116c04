//! Document records and their permission lists

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::AccessLevel;

/// Author reference embedded in a document record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Per-document permission lists
///
/// A user id appears in at most one of `editors`, `commenters` and `readers`.
/// The lists are only rewritten through
/// [`PermissionManager::set_user_access`](crate::PermissionManager::set_user_access).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPermissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    editors: Vec<String>,
    #[serde(default)]
    commenters: Vec<String>,
    #[serde(default)]
    readers: Vec<String>,
}

impl DocumentPermissions {
    /// Create empty permission lists
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editors(&self) -> &[String] {
        &self.editors
    }

    pub fn commenters(&self) -> &[String] {
        &self.commenters
    }

    pub fn readers(&self) -> &[String] {
        &self.readers
    }

    /// List-derived level for a user, ignoring ownership and admin status
    pub fn listed_level(&self, user_id: &str) -> AccessLevel {
        if self.editors.iter().any(|u| u == user_id) {
            AccessLevel::Editor
        } else if self.commenters.iter().any(|u| u == user_id) {
            AccessLevel::Commenter
        } else if self.readers.iter().any(|u| u == user_id) {
            AccessLevel::Reader
        } else {
            AccessLevel::None
        }
    }

    /// Move a user into exactly the list matching `level`
    ///
    /// `None` and `Owner` leave the user in no list.
    pub(crate) fn assign(&mut self, user_id: &str, level: AccessLevel) {
        self.editors.retain(|u| u != user_id);
        self.commenters.retain(|u| u != user_id);
        self.readers.retain(|u| u != user_id);

        let list = match level {
            AccessLevel::Editor => &mut self.editors,
            AccessLevel::Commenter => &mut self.commenters,
            AccessLevel::Reader => &mut self.readers,
            AccessLevel::None | AccessLevel::Owner => return,
        };
        list.push(user_id.to_string());
    }
}

/// A document as seen by the permission layer
///
/// Fields this layer does not interpret are kept in `extra` so a record can be
/// read and written back without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Older records name the owner `owner`
    #[serde(default, rename = "owner", skip_serializing_if = "Option::is_none")]
    pub legacy_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<DocumentPermissions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Create a document with no permissions record
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the owner field
    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Attach a permissions record
    pub fn with_permissions(mut self, permissions: DocumentPermissions) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Resolved owner: `ownerId`, then `owner`, then `author.id`, then
    /// `permissions.owner`
    pub fn owner(&self) -> Option<&str> {
        self.owner_id
            .as_deref()
            .or(self.legacy_owner.as_deref())
            .or_else(|| self.author.as_ref().map(|a| a.id.as_str()))
            .or_else(|| self.permissions.as_ref().and_then(|p| p.owner.as_deref()))
    }
}

#[cfg(test)]
impl DocumentPermissions {
    pub(crate) fn with_editor(mut self, user_id: &str) -> Self {
        self.assign(user_id, AccessLevel::Editor);
        self
    }

    pub(crate) fn with_commenter(mut self, user_id: &str) -> Self {
        self.assign(user_id, AccessLevel::Commenter);
        self
    }

    pub(crate) fn with_reader(mut self, user_id: &str) -> Self {
        self.assign(user_id, AccessLevel::Reader);
        self
    }
}
