//! Trading and exchange response payloads

use chrono::{DateTime, Utc};
use gridfall_domain_types::{CurrencyCode, TradeStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;
use crate::types::FundsDelta;

/// Exchange rate table against a base currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRates {
    pub base: CurrencyCode,
    pub rates: Vec<ExchangeRateEntry>,
    pub as_of: DateTime<Utc>,
}

impl ExchangeRates {
    /// Look up the rate for a currency, if quoted
    pub fn rate_for(&self, currency: CurrencyCode) -> Option<f64> {
        self.rates
            .iter()
            .find(|entry| entry.currency == currency)
            .map(|entry| entry.rate)
    }
}

/// One quoted rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateEntry {
    pub currency: CurrencyCode,
    /// Units of `currency` per unit of the base
    pub rate: f64,
    /// Conversion spread in basis points; omitted means no spread
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub spread_bps: Presence<u32>,
}

/// Result of a completed conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub wallet_id: Uuid,
    pub debited: FundsDelta,
    pub credited: FundsDelta,
    pub rate_used: f64,
    /// Quote honored by the conversion, when one was supplied
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub quote_id: Presence<Uuid>,
}

/// Wire view of a trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOfferResponse {
    pub trade_id: Uuid,
    pub status: TradeStatus,
    pub initiator_character_id: Uuid,
    pub recipient_character_id: Uuid,
    pub offered_item_ids: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub offered_funds: Presence<FundsDelta>,
    /// Absent once the trade reaches a terminal status
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub expires_at: Presence<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_rates_lookup() {
        let rates = ExchangeRates {
            base: CurrencyCode::Credits,
            rates: vec![
                ExchangeRateEntry {
                    currency: CurrencyCode::Scrip,
                    rate: 12.5,
                    spread_bps: Presence::Present(80),
                },
                ExchangeRateEntry {
                    currency: CurrencyCode::CorpToken,
                    rate: 0.4,
                    spread_bps: Presence::Missing,
                },
            ],
            as_of: "2024-11-02T10:00:00Z".parse().unwrap(),
        };
        assert_eq!(rates.rate_for(CurrencyCode::Scrip), Some(12.5));
        assert_eq!(rates.rate_for(CurrencyCode::StreetCred), None);
    }

    #[test]
    fn test_exchange_rates_round_trip() {
        let rates = ExchangeRates {
            base: CurrencyCode::Credits,
            rates: vec![ExchangeRateEntry {
                currency: CurrencyCode::Scrip,
                rate: 12.5,
                spread_bps: Presence::Missing,
            }],
            as_of: "2024-11-02T10:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&rates).unwrap();
        let back: ExchangeRates = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rates);
    }

    #[test]
    fn test_convert_response_wire_shape() {
        let response = ConvertResponse {
            wallet_id: Uuid::nil(),
            debited: FundsDelta::new(CurrencyCode::Scrip, 1_500),
            credited: FundsDelta::new(CurrencyCode::Credits, 120),
            rate_used: 12.5,
            quote_id: Presence::Missing,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["debited"]["currency"], "SCRIP");
        assert_eq!(json["credited"]["currency"], "CREDITS");
        assert!(json.get("quoteId").is_none());
    }
}
