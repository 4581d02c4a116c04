//! End-to-end checks of document and block guards
//!
//! Documents and blocks are built from JSON the way a host store hands them
//! over, then evaluated for different actors.

use folio_guard::{
    AccessLevel, Block, BlockProtection, Document, PermissionCode, PermissionManager,
    ProtectionLevel, StaticActor,
};
use serde_json::json;

fn document(value: serde_json::Value) -> Document {
    serde_json::from_value(value).unwrap()
}

fn block(value: serde_json::Value) -> Block {
    serde_json::from_value(value).unwrap()
}

fn guard(user: &str) -> BlockProtection<StaticActor> {
    BlockProtection::with_context(StaticActor::user(user))
}

/// A read-only block stops an editor but not the document owner
#[test]
fn test_read_only_block_owner_vs_editor() {
    let doc = document(json!({
        "id": "d1",
        "owner": "u1",
        "permissions": { "editors": ["u2"] }
    }));
    let blk = block(json!({ "id": "b1", "protected": true, "protectionLevel": "read-only" }));

    let err = guard("u2").can_edit_block(&blk, &doc, "edit").unwrap_err();
    assert_eq!(err.code, PermissionCode::BlockProtected);
    assert_eq!(err.detail("blockId"), Some("b1"));

    assert!(guard("u1").can_edit_block(&blk, &doc, "edit").is_ok());
}

/// Unprotected blocks report the document-level denial
#[test]
fn test_unprotected_block_reader_gets_document_error() {
    let doc = document(json!({
        "id": "d1",
        "ownerId": "u1",
        "permissions": { "readers": ["u3"] }
    }));
    let blk = block(json!({ "id": "b1" }));

    let err = guard("u3").can_edit_block(&blk, &doc, "edit").unwrap_err();
    assert_eq!(err.code, PermissionCode::NoEditAccess);
}

#[test]
fn test_create_safe_copy_for_reader_and_stranger() {
    let doc = document(json!({
        "id": "d1",
        "ownerId": "u1",
        "permissions": { "readers": ["u3"] }
    }));
    let blk = block(json!({
        "id": "b1",
        "protected": true,
        "protectionLevel": "read-only",
        "content": "Quarterly numbers"
    }));

    let copy = guard("u3").create_safe_copy(&blk, &doc).unwrap();
    let value = serde_json::to_value(&copy).unwrap();
    assert_eq!(value["readOnly"], true);
    assert_eq!(value["content"], "Quarterly numbers");
    assert_eq!(value["protectionLevel"], "read-only");

    assert!(guard("nobody").create_safe_copy(&blk, &doc).is_none());
}

#[test]
fn test_protected_without_level_defaults_to_read_only() {
    let doc = document(json!({
        "id": "d1",
        "ownerId": "u1",
        "permissions": { "editors": ["u2"] }
    }));
    let blk = block(json!({ "id": "b1", "protected": true }));

    assert_eq!(guard("u2").protection_level(&blk), ProtectionLevel::ReadOnly);
    let err = guard("u2").can_move_block(&blk, &doc).unwrap_err();
    assert_eq!(err.code, PermissionCode::BlockProtected);
    assert_eq!(err.detail("action"), Some("move"));
}

#[test]
fn test_stored_unknown_protection_level() {
    let doc = document(json!({ "id": "d1", "ownerId": "u1", "permissions": {} }));
    let blk = block(json!({ "id": "b1", "protected": true, "protectionLevel": "frozen" }));

    let err = guard("u1").can_delete_block(&blk, &doc).unwrap_err();
    assert_eq!(err.code, PermissionCode::UnknownProtectionLevel);
}

#[test]
fn test_admin_only_block() {
    let doc = document(json!({ "id": "d1", "ownerId": "u1", "permissions": {} }));
    let blk = block(json!({ "id": "b1", "protected": true, "protectionLevel": "admin-only" }));

    let err = guard("u1").can_edit_block(&blk, &doc, "edit").unwrap_err();
    assert_eq!(err.code, PermissionCode::BlockAdminOnly);

    let admin = BlockProtection::with_context(StaticActor::admin("root"));
    assert!(admin.can_edit_block(&blk, &doc, "edit").is_ok());
}

/// Self-evaluation as an admin grants editor access; evaluating the same
/// admin through a different explicit user id does not
#[test]
fn test_admin_bonus_asymmetry() {
    let doc = document(json!({ "id": "d1", "ownerId": "u1", "permissions": {} }));
    let pm = PermissionManager::new(StaticActor::admin("root"));

    assert_eq!(pm.access_level(&doc, None), AccessLevel::Editor);
    assert_eq!(pm.access_level(&doc, Some("someone-else")), AccessLevel::None);
    assert!(pm.can_edit_document(&doc).is_ok());
    assert_eq!(
        pm.can_delete_document(&doc).unwrap_err().code,
        PermissionCode::NoDeleteAccess
    );
}

/// Ownership is decided by the owner field alone
#[test]
fn test_owner_independent_of_lists() {
    let doc = document(json!({
        "id": "d1",
        "ownerId": "u1",
        "permissions": { "readers": ["u1"], "editors": ["u2"] }
    }));
    let pm = PermissionManager::new(StaticActor::user("u9"));

    assert_eq!(pm.access_level(&doc, Some("u1")), AccessLevel::Owner);
    assert_ne!(pm.access_level(&doc, Some("u2")), AccessLevel::Owner);
}

#[test]
fn test_set_user_access_single_membership() {
    let mut doc = document(json!({ "id": "d1", "ownerId": "u1" }));
    let pm = PermissionManager::new(StaticActor::user("u1"));

    // No permissions record yet: even the owner resolves to no access
    assert_eq!(
        pm.set_user_access(&mut doc, "u2", AccessLevel::Editor)
            .unwrap_err()
            .code,
        PermissionCode::NoPermissionManageAccess
    );

    let mut doc = document(json!({ "id": "d1", "ownerId": "u1", "permissions": {} }));
    for level in [
        AccessLevel::Editor,
        AccessLevel::Commenter,
        AccessLevel::Reader,
        AccessLevel::Owner,
        AccessLevel::None,
        AccessLevel::Reader,
    ] {
        pm.set_user_access(&mut doc, "u2", level).unwrap();
        let perms = doc.permissions.as_ref().unwrap();
        let memberships = [perms.editors(), perms.commenters(), perms.readers()]
            .iter()
            .filter(|list| list.iter().any(|u| u == "u2"))
            .count();
        let expected = match level {
            AccessLevel::None | AccessLevel::Owner => 0,
            _ => 1,
        };
        assert_eq!(memberships, expected, "after setting {}", level);
    }

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["permissions"]["readers"], json!(["u2"]));
    assert_eq!(value["permissions"]["editors"], json!([]));
}

#[test]
fn test_protection_round_trip_through_storage() {
    let doc = document(json!({ "id": "d1", "ownerId": "u1", "permissions": {} }));
    let mut blk = block(json!({ "id": "b1", "ownerId": "u2" }));
    let owner = guard("u1");

    owner
        .set_protection(&mut blk, &doc, ProtectionLevel::AdminOnly)
        .unwrap();
    let stored = serde_json::to_value(&blk).unwrap();
    assert_eq!(stored["protected"], true);
    assert_eq!(stored["protectionLevel"], "admin-only");

    let reloaded = block(stored);
    assert_eq!(owner.protection_level(&reloaded), ProtectionLevel::AdminOnly);

    let err = guard("u2")
        .remove_protection(&mut blk, &doc)
        .unwrap_err();
    assert_eq!(err.code, PermissionCode::NotOwner);
}

#[test]
fn test_duplicate_rules() {
    let doc = document(json!({
        "id": "d1",
        "ownerId": "u1",
        "permissions": { "readers": ["u3"] }
    }));
    let plain = block(json!({ "id": "b1" }));
    let locked = block(json!({ "id": "b2", "protected": true }));

    assert!(guard("u3").can_duplicate_block(&plain, &doc).is_ok());
    assert_eq!(
        guard("u3")
            .can_duplicate_block(&locked, &doc)
            .unwrap_err()
            .code,
        PermissionCode::BlockProtected
    );
    assert_eq!(
        guard("u4")
            .can_duplicate_block(&plain, &doc)
            .unwrap_err()
            .code,
        PermissionCode::NoReadAccess
    );
}
