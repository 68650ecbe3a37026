//! Loot roll request payloads

use gridfall_domain_types::{RollDecision, RollMethod};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;

/// Configuration a roll is opened with
///
/// `master_looter_id` only has meaning when `method` is MASTER_LOOTER;
/// this layer carries the pair as sent and leaves the cross-field check
/// to the roll service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollConfig {
    pub method: RollMethod,
    /// Seconds until an open roll expires
    pub timeout_seconds: u32,
    pub allow_pass: bool,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub master_looter_id: Presence<Uuid>,
}

impl RollConfig {
    pub fn new(method: RollMethod, timeout_seconds: u32) -> Self {
        Self {
            method,
            timeout_seconds,
            allow_pass: true,
            master_looter_id: Presence::Missing,
        }
    }
}

/// Open a roll over a loot drop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollStartRequest {
    pub loot_drop_id: Uuid,
    pub config: RollConfig,
    /// Characters allowed to submit a decision
    pub eligible_character_ids: Vec<Uuid>,
}

impl RollStartRequest {
    pub fn new(loot_drop_id: Uuid, config: RollConfig, eligible_character_ids: Vec<Uuid>) -> Self {
        Self {
            loot_drop_id,
            config,
            eligible_character_ids,
        }
    }
}

/// Submit a decision on an open roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollDecisionRequest {
    pub roll_id: Uuid,
    pub character_id: Uuid,
    pub decision: RollDecision,
}

impl RollDecisionRequest {
    pub fn new(roll_id: Uuid, character_id: Uuid, decision: RollDecision) -> Self {
        Self {
            roll_id,
            character_id,
            decision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_roll_start_round_trip() {
        let request = RollStartRequest::new(
            Uuid::nil(),
            RollConfig {
                method: RollMethod::MasterLooter,
                timeout_seconds: 90,
                allow_pass: false,
                master_looter_id: Presence::Present(Uuid::nil()),
            },
            vec![Uuid::nil()],
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["config"]["method"], "MASTER_LOOTER");

        let back: RollStartRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_roll_config_carries_looter_even_without_master_method() {
        // No cross-field invariant at this layer: the pair travels as sent.
        let decoded: RollConfig = serde_json::from_value(json!({
            "method": "ROUND_ROBIN",
            "timeoutSeconds": 60,
            "allowPass": true,
            "masterLooterId": "00000000-0000-0000-0000-000000000000"
        }))
        .unwrap();
        assert!(decoded.master_looter_id.is_present());
    }

    #[test]
    fn test_roll_decision_rejects_unknown_decision() {
        let result = serde_json::from_value::<RollDecisionRequest>(json!({
            "rollId": "00000000-0000-0000-0000-000000000000",
            "characterId": "00000000-0000-0000-0000-000000000000",
            "decision": "ROLL"
        }));
        assert!(result.is_err());
    }
}
