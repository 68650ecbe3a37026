//! Item quality tier enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UnknownVariantError;

/// Quality tier of an item or crafting result
///
/// Ordered from worst to best; ordering is used for UI sorting and for
/// comparing a predicted crafting outcome against a blueprint minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemQuality {
    Poor,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl ItemQuality {
    /// Canonical wire strings, worst to best
    pub const WIRE_VALUES: &'static [&'static str] =
        &["POOR", "COMMON", "UNCOMMON", "RARE", "EPIC", "LEGENDARY"];

    /// Get all quality tiers, worst to best
    pub fn all() -> &'static [ItemQuality] {
        &[
            ItemQuality::Poor,
            ItemQuality::Common,
            ItemQuality::Uncommon,
            ItemQuality::Rare,
            ItemQuality::Epic,
            ItemQuality::Legendary,
        ]
    }

    /// Get the canonical wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemQuality::Poor => "POOR",
            ItemQuality::Common => "COMMON",
            ItemQuality::Uncommon => "UNCOMMON",
            ItemQuality::Rare => "RARE",
            ItemQuality::Epic => "EPIC",
            ItemQuality::Legendary => "LEGENDARY",
        }
    }

    /// Get a display name for UI dropdowns
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemQuality::Poor => "Poor",
            ItemQuality::Common => "Common",
            ItemQuality::Uncommon => "Uncommon",
            ItemQuality::Rare => "Rare",
            ItemQuality::Epic => "Epic",
            ItemQuality::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for ItemQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ItemQuality {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POOR" => Ok(ItemQuality::Poor),
            "COMMON" => Ok(ItemQuality::Common),
            "UNCOMMON" => Ok(ItemQuality::Uncommon),
            "RARE" => Ok(ItemQuality::Rare),
            "EPIC" => Ok(ItemQuality::Epic),
            "LEGENDARY" => Ok(ItemQuality::Legendary),
            _ => Err(UnknownVariantError::new(
                "ItemQuality",
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
    fn test_quality_parse_canonical() {
        assert_eq!("EPIC".parse::<ItemQuality>().unwrap(), ItemQuality::Epic);
        assert_eq!(
            "LEGENDARY".parse::<ItemQuality>().unwrap(),
            ItemQuality::Legendary
        );
    }

    #[test]
    fn test_quality_parse_is_case_sensitive() {
        let err = "legendary".parse::<ItemQuality>().unwrap_err();
        assert_eq!(err.enum_name, "ItemQuality");
        assert_eq!(err.value, "legendary");
    }

    #[test]
    fn test_quality_display_emits_wire_string() {
        assert_eq!(ItemQuality::Rare.to_string(), "RARE");
    }

    #[test]
    fn test_quality_ordering() {
        assert!(ItemQuality::Poor < ItemQuality::Common);
        assert!(ItemQuality::Epic < ItemQuality::Legendary);
    }

    #[test]
    fn test_quality_serde_round_trip() {
        for quality in ItemQuality::all() {
            let json = serde_json::to_string(quality).unwrap();
            assert_eq!(json, format!("\"{}\"", quality.as_str()));
            let back: ItemQuality = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *quality);
        }
    }

    #[test]
    fn test_quality_serde_rejects_lowercase() {
        assert!(serde_json::from_str::<ItemQuality>("\"legendary\"").is_err());
    }
}
