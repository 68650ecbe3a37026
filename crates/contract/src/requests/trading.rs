//! Trading and currency conversion request payloads

use gridfall_domain_types::CurrencyCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;
use crate::types::FundsDelta;

/// Convert between currencies inside one wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub wallet_id: Uuid,
    pub from_currency: CurrencyCode,
    pub to_currency: CurrencyCode,
    /// Amount in minor units of the source currency
    pub amount: u64,
    /// Rate quote to honor; omitted converts at the spot rate
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub quote_id: Presence<Uuid>,
}

impl ConvertRequest {
    pub fn new(
        wallet_id: Uuid,
        from_currency: CurrencyCode,
        to_currency: CurrencyCode,
        amount: u64,
    ) -> Self {
        Self {
            wallet_id,
            from_currency,
            to_currency,
            amount,
            quote_id: Presence::Missing,
        }
    }
}

/// Open a trade offer toward another character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOfferRequest {
    pub initiator_character_id: Uuid,
    pub recipient_character_id: Uuid,
    pub offered_item_ids: Vec<Uuid>,
    /// Funds sweetening the offer, if any
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub offered_funds: Presence<FundsDelta>,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub message: Presence<String>,
}

impl TradeOfferRequest {
    pub fn new(
        initiator_character_id: Uuid,
        recipient_character_id: Uuid,
        offered_item_ids: Vec<Uuid>,
    ) -> Self {
        Self {
            initiator_character_id,
            recipient_character_id,
            offered_item_ids,
            offered_funds: Presence::Missing,
            message: Presence::Missing,
        }
    }
}

/// Accept or decline a proposed trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeConfirmRequest {
    pub trade_id: Uuid,
    pub character_id: Uuid,
    pub accept: bool,
}

impl TradeConfirmRequest {
    pub fn new(trade_id: Uuid, character_id: Uuid, accept: bool) -> Self {
        Self {
            trade_id,
            character_id,
            accept,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_convert_request_round_trip() {
        let request = ConvertRequest::new(
            Uuid::nil(),
            CurrencyCode::Scrip,
            CurrencyCode::Credits,
            1_500,
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fromCurrency"], "SCRIP");
        assert_eq!(json["toCurrency"], "CREDITS");
        assert!(json.get("quoteId").is_none());

        let back: ConvertRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_trade_offer_funds_tri_state() {
        let no_funds: TradeOfferRequest = serde_json::from_value(json!({
            "initiatorCharacterId": "00000000-0000-0000-0000-000000000000",
            "recipientCharacterId": "00000000-0000-0000-0000-000000000000",
            "offeredItemIds": []
        }))
        .unwrap();
        assert!(no_funds.offered_funds.is_missing());

        let withdrawn: TradeOfferRequest = serde_json::from_value(json!({
            "initiatorCharacterId": "00000000-0000-0000-0000-000000000000",
            "recipientCharacterId": "00000000-0000-0000-0000-000000000000",
            "offeredItemIds": [],
            "offeredFunds": null
        }))
        .unwrap();
        assert!(withdrawn.offered_funds.is_null());
        assert_ne!(no_funds, withdrawn);
    }
}
