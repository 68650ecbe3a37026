//! Crafting calculation response payloads
//!
//! The success-chance math lives in the crafting service; these shapes
//! carry its output verbatim.

use gridfall_domain_types::ItemQuality;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;

/// Response to a chance calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraftingChanceResponse {
    pub calculation: CraftingCalculation,
}

/// Priced crafting attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraftingCalculation {
    /// Id to reference when committing the attempt
    pub calculation_id: Uuid,
    pub blueprint_id: Uuid,
    /// Probability in [0.0, 1.0] as computed by the crafting service
    pub success_chance: f64,
    pub predicted_quality: ItemQuality,
    /// Components the character still lacks; empty when craftable now
    #[serde(default)]
    pub missing_components: Vec<MissingComponent>,
    /// Only reported when the character has a critical-craft perk
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub critical_success_chance: Presence<f64>,
}

impl CraftingCalculation {
    /// Check if the attempt can be committed as quoted
    pub fn is_craftable(&self) -> bool {
        self.missing_components.is_empty()
    }
}

/// Shortfall of one required component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingComponent {
    pub component_item_id: Uuid,
    pub required_quantity: u32,
    pub available_quantity: u32,
}

impl MissingComponent {
    /// Units still needed
    pub fn shortfall(&self) -> u32 {
        self.required_quantity.saturating_sub(self.available_quantity)
    }
}
