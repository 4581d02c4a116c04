//! Block-level protection
//!
//! A protected block overrides document policy: read-only blocks are editable
//! by the document owner or the block owner only, admin-only blocks by
//! administrators only. Unprotected blocks fall back to the document guard.

use tracing::{debug, info};

use crate::access::{ActorContext, PermissionManager};
use crate::error::{PermissionError, PermissionResult};
use crate::model::{Block, Document, ProtectionLevel};

/// Action names recorded in error details
pub mod action {
    pub const EDIT: &str = "edit";
    pub const DELETE: &str = "delete";
    pub const MOVE: &str = "move";
    pub const DUPLICATE: &str = "duplicate";
}

/// Block guards layered over a [`PermissionManager`]
pub struct BlockProtection<C> {
    permissions: PermissionManager<C>,
}

impl<C: ActorContext> BlockProtection<C> {
    pub fn new(permissions: PermissionManager<C>) -> Self {
        Self { permissions }
    }

    /// Build over a bare actor context
    pub fn with_context(context: C) -> Self {
        Self::new(PermissionManager::new(context))
    }

    pub fn permissions(&self) -> &PermissionManager<C> {
        &self.permissions
    }

    /// Check whether the current actor may perform `action` on the block
    ///
    /// `action` only labels the error details; it never changes the outcome.
    pub fn can_edit_block(
        &self,
        block: &Block,
        document: &Document,
        action: &str,
    ) -> PermissionResult<()> {
        if !block.is_protected() {
            return self.permissions.can_edit_document(document);
        }

        let result = match block.protection_level() {
            ProtectionLevel::None => return self.permissions.can_edit_document(document),
            ProtectionLevel::ReadOnly => {
                let block_owner = block
                    .owner_id
                    .as_deref()
                    .is_some_and(|id| self.permissions.is_current_user(id));
                if self.permissions.is_owner(document) || block_owner {
                    Ok(())
                } else {
                    Err(PermissionError::block_protected(&block.id, action))
                }
            }
            ProtectionLevel::AdminOnly => {
                if self.permissions.is_admin() {
                    Ok(())
                } else {
                    Err(PermissionError::block_admin_only(&block.id, action))
                }
            }
            ProtectionLevel::Unknown(raw) => {
                Err(PermissionError::unknown_protection_level(&block.id, &raw))
            }
        };

        if let Err(err) = &result {
            debug!(
                code = %err.code,
                block = %block.id,
                document = %document.id,
                action,
                "Block permission denied"
            );
        }
        result
    }

    pub fn can_delete_block(&self, block: &Block, document: &Document) -> PermissionResult<()> {
        self.can_edit_block(block, document, action::DELETE)
    }

    pub fn can_move_block(&self, block: &Block, document: &Document) -> PermissionResult<()> {
        self.can_edit_block(block, document, action::MOVE)
    }

    /// Readers may duplicate unprotected blocks; protected blocks also need
    /// block edit rights
    pub fn can_duplicate_block(&self, block: &Block, document: &Document) -> PermissionResult<()> {
        self.permissions.can_read_document(document)?;
        if block.is_protected() {
            self.can_edit_block(block, document, action::DUPLICATE)?;
        }
        Ok(())
    }

    pub fn is_protected(&self, block: &Block) -> bool {
        block.is_protected()
    }

    pub fn protection_level(&self, block: &Block) -> ProtectionLevel {
        block.protection_level()
    }

    /// Protect a block; document owner only
    pub fn set_protection(
        &self,
        block: &mut Block,
        document: &Document,
        level: ProtectionLevel,
    ) -> PermissionResult<()> {
        self.require_owner(document)?;
        if let ProtectionLevel::Unknown(raw) = &level {
            return Err(PermissionError::unknown_protection_level(&block.id, raw));
        }

        info!(block = %block.id, document = %document.id, level = %level, "Block protected");
        block.protect(level);
        Ok(())
    }

    /// Remove a block's protection; document owner only
    pub fn remove_protection(&self, block: &mut Block, document: &Document) -> PermissionResult<()> {
        self.require_owner(document)?;

        info!(block = %block.id, document = %document.id, "Block protection removed");
        block.unprotect();
        Ok(())
    }

    /// Copy of the block suited to the current actor
    ///
    /// Editors get an unmodified copy, readers a copy marked read-only, and
    /// everyone else nothing.
    pub fn create_safe_copy(&self, block: &Block, document: &Document) -> Option<Block> {
        if self.can_edit_block(block, document, action::EDIT).is_ok() {
            return Some(block.clone());
        }

        match self.permissions.can_read_document(document) {
            Ok(()) => {
                let mut copy = block.clone();
                copy.read_only = true;
                Some(copy)
            }
            Err(_) => None,
        }
    }

    fn require_owner(&self, document: &Document) -> PermissionResult<()> {
        if self.permissions.is_owner(document) {
            Ok(())
        } else {
            debug!(document = %document.id, "Block protection change denied");
            Err(PermissionError::not_owner(&document.id))
        }
    }
}
