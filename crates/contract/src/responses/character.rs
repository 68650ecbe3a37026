//! Character lifecycle and slot state response payloads

use chrono::{DateTime, Utc};
use gridfall_domain_types::{CharacterLifecycleState, CurrencyCode, LockReason, PaymentStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;
use crate::types::CharacterAttributes;

/// Full wire view of a character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub id: Uuid,
    pub handle: String,
    pub archetype: String,
    pub lifecycle: CharacterLifecycleState,
    pub attributes: CharacterAttributes,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub callsign: Presence<String>,
    pub created_at: DateTime<Utc>,
    /// Set while the character is soft-deleted
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub deleted_at: Presence<DateTime<Utc>>,
    /// Set while the character is locked
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub lock_reason: Presence<LockReason>,
}

/// Result of a restore request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRestoreResponse {
    pub character: CharacterResponse,
    pub restored_at: DateTime<Utc>,
    /// Restore fee payment, when one was charged
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub payment: Presence<PendingPayment>,
}

/// Snapshot of the lifecycle work queues for an account
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterLifecycleQueues {
    #[serde(default)]
    pub pending_restore: Vec<QueuedLifecycleEntry>,
    #[serde(default)]
    pub pending_purge: Vec<QueuedLifecycleEntry>,
}

/// One queued lifecycle transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedLifecycleEntry {
    pub character_id: Uuid,
    pub queued_at: DateTime<Utc>,
    /// Earliest time the queue worker may act on the entry
    pub execute_after: DateTime<Utc>,
}

/// Slot occupancy and outstanding payments for an account
///
/// The two lists are independent snapshots; nothing at this layer
/// reconciles payment totals against slot state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSlotStateResponse {
    #[serde(default)]
    pub slots: Vec<SlotInfo>,
    #[serde(default)]
    pub pending_payments: Vec<PendingPayment>,
}

/// One character slot on an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotInfo {
    pub slot_index: u8,
    /// Occupying character; null marks a slot freed by a purge
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub character_id: Presence<Uuid>,
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub lock_reason: Presence<LockReason>,
    /// Expiry of a rented slot; permanent slots omit it
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub expires_at: Presence<DateTime<Utc>>,
}

/// An in-flight payment attached to a slot or restore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPayment {
    pub payment_id: Uuid,
    pub status: PaymentStatus,
    pub currency: CurrencyCode,
    /// Minor units
    pub amount: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub provider_reference: Presence<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_character() -> CharacterResponse {
        CharacterResponse {
            id: Uuid::nil(),
            handle: "vex".to_string(),
            archetype: "netrunner".to_string(),
            lifecycle: CharacterLifecycleState::Active,
            attributes: CharacterAttributes::new(3, 8, 7, 6, 5),
            callsign: Presence::Present("Ghostline".to_string()),
            created_at: "2024-11-02T10:00:00Z".parse().unwrap(),
            deleted_at: Presence::Missing,
            lock_reason: Presence::Missing,
        }
    }

    #[test]
    fn test_character_response_round_trip() {
        let character = sample_character();
        let json = serde_json::to_value(&character).unwrap();
        assert_eq!(json["lifecycle"], "ACTIVE");
        assert!(json.get("deletedAt").is_none());

        let back: CharacterResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back, character);
    }

    #[test]
    fn test_slot_state_lists_default_to_empty() {
        let decoded: CharacterSlotStateResponse = serde_json::from_value(json!({})).unwrap();
        assert!(decoded.slots.is_empty());
        assert!(decoded.pending_payments.is_empty());
    }

    #[test]
    fn test_slot_info_freed_slot_uses_explicit_null() {
        // A purged slot reports characterId: null, distinct from a slot
        // whose payload simply omits the field.
        let freed: SlotInfo = serde_json::from_value(json!({
            "slotIndex": 2,
            "characterId": null,
            "locked": false
        }))
        .unwrap();
        assert!(freed.character_id.is_null());

        let unreported: SlotInfo = serde_json::from_value(json!({
            "slotIndex": 2,
            "locked": false
        }))
        .unwrap();
        assert!(unreported.character_id.is_missing());
        assert_ne!(freed, unreported);
    }

    #[test]
    fn test_restore_response_round_trip_with_payment() {
        let response = CharacterRestoreResponse {
            character: sample_character(),
            restored_at: "2024-11-03T09:30:00Z".parse().unwrap(),
            payment: Presence::Present(PendingPayment {
                payment_id: Uuid::nil(),
                status: PaymentStatus::Captured,
                currency: CurrencyCode::Credits,
                amount: 5_000,
                created_at: "2024-11-03T09:29:00Z".parse().unwrap(),
                provider_reference: Presence::Present("ch_123".to_string()),
            }),
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: CharacterRestoreResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
