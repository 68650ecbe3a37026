//! Crafting discipline enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UnknownVariantError;

/// Crafting discipline a blueprint belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CraftingDiscipline {
    /// Firearms and melee hardware
    Weaponsmith,
    /// Cyberware and netrunning gear
    Techweaver,
    /// Stims, boosters, and toxins
    Chemist,
    /// Drones and vehicle mods
    Rigger,
}

impl CraftingDiscipline {
    pub const WIRE_VALUES: &'static [&'static str] =
        &["WEAPONSMITH", "TECHWEAVER", "CHEMIST", "RIGGER"];

    pub fn all() -> &'static [CraftingDiscipline] {
        &[
            CraftingDiscipline::Weaponsmith,
            CraftingDiscipline::Techweaver,
            CraftingDiscipline::Chemist,
            CraftingDiscipline::Rigger,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CraftingDiscipline::Weaponsmith => "WEAPONSMITH",
            CraftingDiscipline::Techweaver => "TECHWEAVER",
            CraftingDiscipline::Chemist => "CHEMIST",
            CraftingDiscipline::Rigger => "RIGGER",
        }
    }

    /// Get a display name for UI dropdowns
    pub fn display_name(&self) -> &'static str {
        match self {
            CraftingDiscipline::Weaponsmith => "Weaponsmith",
            CraftingDiscipline::Techweaver => "Techweaver",
            CraftingDiscipline::Chemist => "Chemist",
            CraftingDiscipline::Rigger => "Rigger",
        }
    }
}

impl fmt::Display for CraftingDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CraftingDiscipline {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WEAPONSMITH" => Ok(CraftingDiscipline::Weaponsmith),
            "TECHWEAVER" => Ok(CraftingDiscipline::Techweaver),
            "CHEMIST" => Ok(CraftingDiscipline::Chemist),
            "RIGGER" => Ok(CraftingDiscipline::Rigger),
            _ => Err(UnknownVariantError::new(
                "CraftingDiscipline",
                s,
                Self::WIRE_VALUES,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discipline_round_trip() {
        for discipline in CraftingDiscipline::all() {
            let json = serde_json::to_string(discipline).unwrap();
            assert_eq!(json, format!("\"{}\"", discipline.as_str()));
            let back: CraftingDiscipline = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *discipline);
        }
    }
}
