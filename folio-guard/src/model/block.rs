//! Block records with protection state

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::ProtectionLevel;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Stored flags may be `null`, which reads as unset
fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// A document block as seen by the protection layer
///
/// `protected` and `protection_level` have no public setters: a block's
/// protection only changes through [`BlockProtection`](crate::BlockProtection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_false")]
    protected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    protection_level: Option<ProtectionLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Set on copies handed to users who may read but not edit the block
    #[serde(default, deserialize_with = "null_as_false", skip_serializing_if = "is_false")]
    pub read_only: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Block {
    /// Create an unprotected block
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the block owner
    pub fn owned_by(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn is_protected(&self) -> bool {
        self.protected
    }

    /// Effective protection level
    ///
    /// Unprotected blocks always read as `None`; protected blocks without a
    /// stored level read as `ReadOnly`.
    pub fn protection_level(&self) -> ProtectionLevel {
        if !self.protected {
            return ProtectionLevel::None;
        }
        self.protection_level.clone().unwrap_or_default()
    }

    /// Stored level exactly as recorded, without defaulting
    pub fn stored_protection_level(&self) -> Option<&ProtectionLevel> {
        self.protection_level.as_ref()
    }

    pub(crate) fn protect(&mut self, level: ProtectionLevel) {
        self.protected = true;
        self.protection_level = Some(level);
    }

    pub(crate) fn unprotect(&mut self) {
        self.protected = false;
        self.protection_level = Some(ProtectionLevel::None);
    }
}
