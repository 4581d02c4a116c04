//! Document-level permission resolution and guards

use tracing::{debug, info};

use super::{ActorContext, Capabilities, DocumentAction};
use crate::error::{PermissionError, PermissionResult};
use crate::model::{AccessLevel, Document, DocumentPermissions};

/// Resolves document access levels and enforces them
///
/// Guards return `Ok(())` when the current actor may proceed and a coded
/// [`PermissionError`] otherwise. The actor context is consulted on every call.
pub struct PermissionManager<C> {
    context: C,
}

impl<C: ActorContext> PermissionManager<C> {
    pub fn new(context: C) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// Whether the current actor is an administrator
    pub fn is_admin(&self) -> bool {
        self.context.is_admin()
    }

    /// Whether `user_id` is the current actor
    pub fn is_current_user(&self, user_id: &str) -> bool {
        self.context.current_user().id == user_id
    }

    /// Whether the current actor owns the document
    pub fn is_owner(&self, document: &Document) -> bool {
        self.access_level(document, None) == AccessLevel::Owner
    }

    /// Resolve the access level of `user_id` (default: current actor)
    ///
    /// First match wins:
    /// 1. no permissions record: `None`
    /// 2. user is the document owner: `Owner`
    /// 3. user is the current actor and an admin: `Editor`
    /// 4. editors list: `Editor`
    /// 5. commenters list: `Commenter`
    /// 6. readers list: `Reader`
    /// 7. otherwise `None`
    ///
    /// The admin bonus in step 3 only applies when evaluating the current
    /// actor, never an arbitrary user id.
    pub fn access_level(&self, document: &Document, user_id: Option<&str>) -> AccessLevel {
        let Some(permissions) = document.permissions.as_ref() else {
            return AccessLevel::None;
        };

        let current = self.context.current_user();
        let user_id = user_id.unwrap_or(current.id.as_str());

        if document.owner() == Some(user_id) {
            return AccessLevel::Owner;
        }

        if user_id == current.id && self.context.is_admin() {
            return AccessLevel::Editor;
        }

        permissions.listed_level(user_id)
    }

    /// Capability flags of the current actor, without raising
    pub fn capabilities(&self, document: &Document) -> Capabilities {
        Capabilities::for_level(self.access_level(document, None))
    }

    pub fn can_read_document(&self, document: &Document) -> PermissionResult<()> {
        self.require(document, DocumentAction::Read)
    }

    pub fn can_edit_document(&self, document: &Document) -> PermissionResult<()> {
        self.require(document, DocumentAction::Edit)
    }

    pub fn can_delete_document(&self, document: &Document) -> PermissionResult<()> {
        self.require(document, DocumentAction::Delete)
    }

    pub fn can_comment_document(&self, document: &Document) -> PermissionResult<()> {
        self.require(document, DocumentAction::Comment)
    }

    pub fn can_manage_permissions(&self, document: &Document) -> PermissionResult<()> {
        self.require(document, DocumentAction::ManagePermissions)
    }

    /// Put `user_id` into exactly the list matching `level`
    ///
    /// Requires permission management rights. A missing permissions record is
    /// created first. `None` and `Owner` remove the user from every list.
    pub fn set_user_access(
        &self,
        document: &mut Document,
        user_id: &str,
        level: AccessLevel,
    ) -> PermissionResult<()> {
        self.can_manage_permissions(document)?;
        self.assign(document, user_id, level);
        Ok(())
    }

    /// Like [`set_user_access`](Self::set_user_access) for a level given by name
    ///
    /// The management check runs before the name is parsed, so a caller
    /// without rights sees `NO_PERMISSION_MANAGE_ACCESS` even for a bad name.
    pub fn set_user_access_by_name(
        &self,
        document: &mut Document,
        user_id: &str,
        level: &str,
    ) -> PermissionResult<()> {
        self.can_manage_permissions(document)?;
        let level: AccessLevel = level.parse()?;
        self.assign(document, user_id, level);
        Ok(())
    }

    pub fn remove_user_access(&self, document: &mut Document, user_id: &str) -> PermissionResult<()> {
        self.set_user_access(document, user_id, AccessLevel::None)
    }

    fn assign(&self, document: &mut Document, user_id: &str, level: AccessLevel) {
        document
            .permissions
            .get_or_insert_with(DocumentPermissions::new)
            .assign(user_id, level);

        info!(
            document = %document.id,
            user = %user_id,
            level = %level,
            "Updated document access"
        );
    }

    fn require(&self, document: &Document, action: DocumentAction) -> PermissionResult<()> {
        let level = self.access_level(document, None);
        if Capabilities::for_level(level).allows(action) {
            return Ok(());
        }

        let err = match action {
            DocumentAction::Read => PermissionError::no_read_access(&document.id),
            DocumentAction::Comment => PermissionError::no_comment_access(&document.id),
            DocumentAction::Edit => PermissionError::no_edit_access(&document.id),
            DocumentAction::Delete => PermissionError::no_delete_access(&document.id),
            DocumentAction::ManagePermissions => {
                PermissionError::no_permission_manage_access(&document.id)
            }
        };
        debug!(
            code = %err.code,
            document = %document.id,
            level = %level,
            "Document permission denied"
        );
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::StaticActor;
    use crate::error::PermissionCode;

    fn shared_doc() -> Document {
        Document::new("doc-1").with_owner("owner").with_permissions(
            DocumentPermissions::new()
                .with_editor("editor")
                .with_commenter("commenter")
                .with_reader("reader"),
        )
    }

    fn manager(user: &str) -> PermissionManager<StaticActor> {
        PermissionManager::new(StaticActor::user(user))
    }

    #[test]
    fn test_no_permissions_record_is_none_even_for_owner() {
        let doc = Document::new("doc-1").with_owner("owner");
        assert_eq!(manager("owner").access_level(&doc, None), AccessLevel::None);
    }

    #[test]
    fn test_levels_from_lists() {
        let doc = shared_doc();
        let pm = manager("someone");
        assert_eq!(pm.access_level(&doc, Some("owner")), AccessLevel::Owner);
        assert_eq!(pm.access_level(&doc, Some("editor")), AccessLevel::Editor);
        assert_eq!(pm.access_level(&doc, Some("commenter")), AccessLevel::Commenter);
        assert_eq!(pm.access_level(&doc, Some("reader")), AccessLevel::Reader);
        assert_eq!(pm.access_level(&doc, Some("stranger")), AccessLevel::None);
        assert_eq!(pm.access_level(&doc, None), AccessLevel::None);
    }

    #[test]
    fn test_owner_wins_over_list_membership() {
        let doc = Document::new("doc-1")
            .with_owner("u1")
            .with_permissions(DocumentPermissions::new().with_reader("u1"));
        assert_eq!(manager("u1").access_level(&doc, None), AccessLevel::Owner);
    }

    #[test]
    fn test_admin_bonus_only_for_current_user() {
        let doc = Document::new("doc-1")
            .with_owner("owner")
            .with_permissions(DocumentPermissions::new());
        let pm = PermissionManager::new(StaticActor::admin("admin"));

        assert_eq!(pm.access_level(&doc, None), AccessLevel::Editor);
        assert_eq!(pm.access_level(&doc, Some("admin")), AccessLevel::Editor);
        assert_eq!(pm.access_level(&doc, Some("other")), AccessLevel::None);
    }

    #[test]
    fn test_guards_by_level() {
        let doc = shared_doc();

        let reader = manager("reader");
        assert!(reader.can_read_document(&doc).is_ok());
        assert_eq!(
            reader.can_comment_document(&doc).unwrap_err().code,
            PermissionCode::NoCommentAccess
        );
        assert_eq!(
            reader.can_edit_document(&doc).unwrap_err().code,
            PermissionCode::NoEditAccess
        );

        let editor = manager("editor");
        assert!(editor.can_edit_document(&doc).is_ok());
        assert!(editor.can_comment_document(&doc).is_ok());
        assert_eq!(
            editor.can_delete_document(&doc).unwrap_err().code,
            PermissionCode::NoDeleteAccess
        );
        assert_eq!(
            editor.can_manage_permissions(&doc).unwrap_err().code,
            PermissionCode::NoPermissionManageAccess
        );

        let owner = manager("owner");
        assert!(owner.can_delete_document(&doc).is_ok());
        assert!(owner.can_manage_permissions(&doc).is_ok());

        let stranger = manager("stranger");
        let err = stranger.can_read_document(&doc).unwrap_err();
        assert_eq!(err.code, PermissionCode::NoReadAccess);
        assert_eq!(err.detail("documentId"), Some("doc-1"));
    }

    #[test]
    fn test_set_user_access_moves_between_lists() {
        let mut doc = shared_doc();
        let pm = manager("owner");

        pm.set_user_access(&mut doc, "reader", AccessLevel::Editor).unwrap();
        let perms = doc.permissions.as_ref().unwrap();
        assert!(perms.readers().is_empty());
        assert!(perms.editors().contains(&"reader".to_string()));

        pm.remove_user_access(&mut doc, "reader").unwrap();
        assert_eq!(pm.access_level(&doc, Some("reader")), AccessLevel::None);
    }

    #[test]
    fn test_set_user_access_requires_owner() {
        let mut doc = shared_doc();
        let before = doc.clone();
        let err = manager("editor")
            .set_user_access(&mut doc, "reader", AccessLevel::Editor)
            .unwrap_err();
        assert_eq!(err.code, PermissionCode::NoPermissionManageAccess);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_set_user_access_by_name() {
        let mut doc = shared_doc();
        let pm = manager("owner");

        pm.set_user_access_by_name(&mut doc, "stranger", "commenter")
            .unwrap();
        assert_eq!(pm.access_level(&doc, Some("stranger")), AccessLevel::Commenter);

        let err = pm
            .set_user_access_by_name(&mut doc, "stranger", "superuser")
            .unwrap_err();
        assert_eq!(err.code, PermissionCode::UnknownAccessLevel);

        let err = manager("reader")
            .set_user_access_by_name(&mut doc, "stranger", "superuser")
            .unwrap_err();
        assert_eq!(err.code, PermissionCode::NoPermissionManageAccess);
    }

    #[test]
    fn test_capabilities_never_raise() {
        let doc = shared_doc();
        let caps = manager("commenter").capabilities(&doc);
        assert!(caps.can_comment);
        assert!(!caps.can_edit);
        assert!(!manager("stranger").capabilities(&doc).can_read);
    }

    #[test]
    fn test_is_owner_and_is_current_user() {
        let doc = shared_doc();
        let pm = manager("owner");
        assert!(pm.is_owner(&doc));
        assert!(pm.is_current_user("owner"));
        assert!(!pm.is_current_user("editor"));
        assert!(!manager("editor").is_owner(&doc));
    }
}
