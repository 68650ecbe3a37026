//! Value shapes shared between requests and responses

use gridfall_domain_types::CurrencyCode;
use serde::{Deserialize, Serialize};

/// Core attribute block of a character
///
/// Values are the character-creation scale (1-10); derived stats live
/// server-side and never travel on this shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterAttributes {
    pub body: u8,
    pub reflexes: u8,
    pub intellect: u8,
    pub tech: u8,
    pub cool: u8,
}

impl CharacterAttributes {
    pub fn new(body: u8, reflexes: u8, intellect: u8, tech: u8, cool: u8) -> Self {
        Self {
            body,
            reflexes,
            intellect,
            tech,
            cool,
        }
    }
}

/// An amount of a single currency moving in or out of a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsDelta {
    pub currency: CurrencyCode,
    /// Minor units; sign is implied by the field carrying the delta
    pub amount: u64,
}

impl FundsDelta {
    pub fn new(currency: CurrencyCode, amount: u64) -> Self {
        Self { currency, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funds_delta_wire_shape() {
        let delta = FundsDelta::new(CurrencyCode::Scrip, 250);
        let json = serde_json::to_value(delta).unwrap();
        assert_eq!(json["currency"], "SCRIP");
        assert_eq!(json["amount"], 250);
    }
}
