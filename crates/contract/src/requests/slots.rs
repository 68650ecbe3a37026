//! Character slot purchase request payloads

use gridfall_domain_types::{CurrencyCode, PaymentStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;

/// Purchase an additional character slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSlotRequest {
    pub wallet_id: Uuid,
    pub currency: CurrencyCode,
    /// Client-generated key; retries with the same key are collapsed
    pub idempotency_key: String,
}

impl PurchaseSlotRequest {
    pub fn new(wallet_id: Uuid, currency: CurrencyCode, idempotency_key: impl Into<String>) -> Self {
        Self {
            wallet_id,
            currency,
            idempotency_key: idempotency_key.into(),
        }
    }
}

/// Provider callback reporting a payment status change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotPaymentCallbackRequest {
    pub payment_id: Uuid,
    pub status: PaymentStatus,
    /// Provider-side reference, absent until the provider assigns one
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub provider_reference: Presence<String>,
}

impl SlotPaymentCallbackRequest {
    pub fn new(payment_id: Uuid, status: PaymentStatus) -> Self {
        Self {
            payment_id,
            status,
            provider_reference: Presence::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_callback_decodes_provider_reference_states() {
        let absent: SlotPaymentCallbackRequest = serde_json::from_value(json!({
            "paymentId": "00000000-0000-0000-0000-000000000000",
            "status": "AUTHORIZED"
        }))
        .unwrap();
        assert!(absent.provider_reference.is_missing());

        let voided: SlotPaymentCallbackRequest = serde_json::from_value(json!({
            "paymentId": "00000000-0000-0000-0000-000000000000",
            "status": "CAPTURED",
            "providerReference": null
        }))
        .unwrap();
        assert!(voided.provider_reference.is_null());
    }

    #[test]
    fn test_callback_rejects_unknown_status() {
        let result = serde_json::from_value::<SlotPaymentCallbackRequest>(json!({
            "paymentId": "00000000-0000-0000-0000-000000000000",
            "status": "captured"
        }));
        assert!(result.is_err());
    }
}
