//! Capability flags derived from an access level

use serde::{Deserialize, Serialize};

use crate::model::AccessLevel;

/// Document actions gated by access level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentAction {
    Read,
    Comment,
    Edit,
    Delete,
    ManagePermissions,
}

impl DocumentAction {
    /// Lowest access level that permits this action
    pub fn minimum_level(&self) -> AccessLevel {
        match self {
            Self::Read => AccessLevel::Reader,
            Self::Comment => AccessLevel::Commenter,
            Self::Edit => AccessLevel::Editor,
            Self::Delete | Self::ManagePermissions => AccessLevel::Owner,
        }
    }
}

/// Capability flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub can_read: bool,
    pub can_comment: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_manage: bool,
}

impl Capabilities {
    /// Flags granted by an access level
    pub fn for_level(level: AccessLevel) -> Self {
        Self {
            can_read: level >= AccessLevel::Reader,
            can_comment: level >= AccessLevel::Commenter,
            can_edit: level >= AccessLevel::Editor,
            can_delete: level == AccessLevel::Owner,
            can_manage: level == AccessLevel::Owner,
        }
    }

    /// Check if this capability set allows an action
    pub fn allows(&self, action: DocumentAction) -> bool {
        match action {
            DocumentAction::Read => self.can_read,
            DocumentAction::Comment => self.can_comment,
            DocumentAction::Edit => self.can_edit,
            DocumentAction::Delete => self.can_delete,
            DocumentAction::ManagePermissions => self.can_manage,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::for_level(AccessLevel::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_has_all_capabilities() {
        let caps = Capabilities::for_level(AccessLevel::Owner);
        assert!(caps.can_read);
        assert!(caps.can_comment);
        assert!(caps.can_edit);
        assert!(caps.can_delete);
        assert!(caps.can_manage);
    }

    #[test]
    fn test_editor_capabilities() {
        let caps = Capabilities::for_level(AccessLevel::Editor);
        assert!(caps.can_read);
        assert!(caps.can_comment);
        assert!(caps.can_edit);
        assert!(!caps.can_delete);
        assert!(!caps.can_manage);
    }

    #[test]
    fn test_commenter_capabilities() {
        let caps = Capabilities::for_level(AccessLevel::Commenter);
        assert!(caps.can_read);
        assert!(caps.can_comment);
        assert!(!caps.can_edit);
    }

    #[test]
    fn test_reader_read_only() {
        let caps = Capabilities::for_level(AccessLevel::Reader);
        assert!(caps.can_read);
        assert!(!caps.can_comment);
        assert!(!caps.can_edit);
        assert!(!caps.can_delete);
    }

    #[test]
    fn test_default_is_no_access() {
        let caps = Capabilities::default();
        assert!(!caps.can_read);
        assert_eq!(caps, Capabilities::for_level(AccessLevel::None));
    }

    #[test]
    fn test_allows_matches_minimum_level() {
        let actions = [
            DocumentAction::Read,
            DocumentAction::Comment,
            DocumentAction::Edit,
            DocumentAction::Delete,
            DocumentAction::ManagePermissions,
        ];
        for level in [
            AccessLevel::None,
            AccessLevel::Reader,
            AccessLevel::Commenter,
            AccessLevel::Editor,
            AccessLevel::Owner,
        ] {
            let caps = Capabilities::for_level(level);
            for action in actions {
                assert_eq!(caps.allows(action), level >= action.minimum_level());
            }
        }
    }
}
