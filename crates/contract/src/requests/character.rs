//! Character lifecycle request payloads
//!
//! Characters are soft-deleted and restorable within a retention window;
//! deletion and restore are requests against the lifecycle queues, not
//! immediate effects.

use gridfall_domain_types::LockReason;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;
use crate::types::CharacterAttributes;

/// Create a new character in a free slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    /// Unique player-facing handle
    pub handle: String,
    /// Archetype key from the game content catalog
    pub archetype: String,
    pub attributes: CharacterAttributes,
    /// Street alias shown in place of the handle when set
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub callsign: Presence<String>,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub portrait_asset_id: Presence<Uuid>,
}

impl CreateCharacterRequest {
    pub fn new(
        handle: impl Into<String>,
        archetype: impl Into<String>,
        attributes: CharacterAttributes,
    ) -> Self {
        Self {
            handle: handle.into(),
            archetype: archetype.into(),
            attributes,
            callsign: Presence::Missing,
            portrait_asset_id: Presence::Missing,
        }
    }
}

/// Partial update of a character
///
/// Every field is tri-state: an omitted field is left unchanged, an
/// explicit `null` clears it, and a value replaces it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacterRequest {
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub callsign: Presence<String>,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub portrait_asset_id: Presence<Uuid>,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub attributes: Presence<CharacterAttributes>,
}

impl UpdateCharacterRequest {
    /// Check if the update carries no changes at all
    pub fn is_empty(&self) -> bool {
        self.callsign.is_missing()
            && self.portrait_asset_id.is_missing()
            && self.attributes.is_missing()
    }
}

/// Request restore of a soft-deleted character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreCharacterRequest {
    pub character_id: Uuid,
    /// Payment intent covering the restore fee, when one is required
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub payment_intent_id: Presence<Uuid>,
}

impl RestoreCharacterRequest {
    pub fn new(character_id: Uuid) -> Self {
        Self {
            character_id,
            payment_intent_id: Presence::Missing,
        }
    }
}

/// Soft-delete a character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCharacterRequest {
    pub character_id: Uuid,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub reason: Presence<String>,
}

impl DeleteCharacterRequest {
    pub fn new(character_id: Uuid) -> Self {
        Self {
            character_id,
            reason: Presence::Missing,
        }
    }
}

/// Apply a lock to a character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockCharacterRequest {
    pub character_id: Uuid,
    pub reason: LockReason,
    /// Operator note attached to the lock record
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub note: Presence<String>,
}

impl LockCharacterRequest {
    pub fn new(character_id: Uuid, reason: LockReason) -> Self {
        Self {
            character_id,
            reason,
            note: Presence::Missing,
        }
    }
}
