//! Loot roll state response payloads

use chrono::{DateTime, Utc};
use gridfall_domain_types::{RollDecision, RollState};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;
use crate::requests::roll::RollConfig;

/// Wire view of a roll at any point in its life
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollStateResponse {
    pub roll_id: Uuid,
    pub loot_drop_id: Uuid,
    pub state: RollState,
    pub config: RollConfig,
    pub participants: Vec<RollParticipant>,
    /// Set once the roll resolves
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub winner: Presence<RollWinner>,
    pub expires_at: DateTime<Utc>,
}

/// One eligible character's standing in a roll
///
/// `decision` is tri-state: absent means the character has not acted
/// yet, an explicit null marks an entry the server voided (for example
/// a character that left the zone), and a value is a submitted decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollParticipant {
    pub character_id: Uuid,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub decision: Presence<RollDecision>,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub decided_at: Presence<DateTime<Utc>>,
}

/// Resolution record of a finished roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollWinner {
    pub character_id: Uuid,
    pub winning_decision: RollDecision,
    /// Tiebreak value the arbitration used, when one was needed
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub tiebreak: Presence<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfall_domain_types::RollMethod;
    use serde_json::json;

    #[test]
    fn test_roll_state_round_trip() {
        let response = RollStateResponse {
            roll_id: Uuid::nil(),
            loot_drop_id: Uuid::nil(),
            state: RollState::Resolved,
            config: RollConfig::new(RollMethod::NeedBeforeGreed, 60),
            participants: vec![
                RollParticipant {
                    character_id: Uuid::nil(),
                    decision: Presence::Present(RollDecision::Need),
                    decided_at: Presence::Present("2024-11-02T10:00:05Z".parse().unwrap()),
                },
                RollParticipant {
                    character_id: Uuid::nil(),
                    decision: Presence::Missing,
                    decided_at: Presence::Missing,
                },
            ],
            winner: Presence::Present(RollWinner {
                character_id: Uuid::nil(),
                winning_decision: RollDecision::Need,
                tiebreak: Presence::Missing,
            }),
            expires_at: "2024-11-02T10:01:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: RollStateResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn test_participant_voided_vs_undecided() {
        let undecided: RollParticipant = serde_json::from_value(json!({
            "characterId": "00000000-0000-0000-0000-000000000000"
        }))
        .unwrap();
        assert!(undecided.decision.is_missing());

        let voided: RollParticipant = serde_json::from_value(json!({
            "characterId": "00000000-0000-0000-0000-000000000000",
            "decision": null
        }))
        .unwrap();
        assert!(voided.decision.is_null());
        assert_ne!(undecided, voided);
    }
}
