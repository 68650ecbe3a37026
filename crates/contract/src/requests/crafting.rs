//! Crafting request payloads
//!
//! The chance calculation is a dry run: the server prices the attempt
//! and reports missing components without consuming anything. A commit
//! references the calculation it was quoted under.

use gridfall_domain_types::CraftingDiscipline;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;

/// Ask the server for the success chance of a crafting attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateCraftingChanceRequest {
    pub character_id: Uuid,
    pub blueprint_id: Uuid,
    pub discipline: CraftingDiscipline,
    /// Workbench tier in use; omitted means crafting without a bench
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub workbench_tier: Presence<u8>,
    /// Component instances the character intends to consume
    pub component_item_ids: Vec<Uuid>,
}

impl CalculateCraftingChanceRequest {
    pub fn new(
        character_id: Uuid,
        blueprint_id: Uuid,
        discipline: CraftingDiscipline,
        component_item_ids: Vec<Uuid>,
    ) -> Self {
        Self {
            character_id,
            blueprint_id,
            discipline,
            workbench_tier: Presence::Missing,
            component_item_ids,
        }
    }
}

/// Commit a crafting attempt previously quoted by a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraftCommitRequest {
    pub character_id: Uuid,
    pub blueprint_id: Uuid,
    /// Calculation the attempt was quoted under
    pub calculation_id: Uuid,
    /// Consume any active success boosters alongside the attempt
    pub consume_boosters: bool,
}

impl CraftCommitRequest {
    pub fn new(character_id: Uuid, blueprint_id: Uuid, calculation_id: Uuid) -> Self {
        Self {
            character_id,
            blueprint_id,
            calculation_id,
            consume_boosters: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_calculate_request_round_trip() {
        let request = CalculateCraftingChanceRequest {
            character_id: Uuid::nil(),
            blueprint_id: Uuid::nil(),
            discipline: CraftingDiscipline::Chemist,
            workbench_tier: Presence::Present(3),
            component_item_ids: vec![Uuid::nil()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["discipline"], "CHEMIST");
        assert_eq!(json["workbenchTier"], 3);

        let back: CalculateCraftingChanceRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_calculate_request_without_bench() {
        let decoded: CalculateCraftingChanceRequest = serde_json::from_value(json!({
            "characterId": "00000000-0000-0000-0000-000000000000",
            "blueprintId": "00000000-0000-0000-0000-000000000000",
            "discipline": "RIGGER",
            "componentItemIds": []
        }))
        .unwrap();
        assert!(decoded.workbench_tier.is_missing());
    }
}
