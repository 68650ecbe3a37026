//! Payment status enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UnknownVariantError;

/// Status of a slot or restore payment, as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Created, not yet authorized
    Pending,
    /// Funds reserved, not yet captured
    Authorized,
    /// Funds captured, payment complete
    Captured,
    /// Authorization or capture failed
    Failed,
    /// Captured funds returned
    Refunded,
    /// Cancelled before capture
    Cancelled,
}

impl PaymentStatus {
    pub const WIRE_VALUES: &'static [&'static str] = &[
        "PENDING",
        "AUTHORIZED",
        "CAPTURED",
        "FAILED",
        "REFUNDED",
        "CANCELLED",
    ];

    pub fn all() -> &'static [PaymentStatus] {
        &[
            PaymentStatus::Pending,
            PaymentStatus::Authorized,
            PaymentStatus::Captured,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
            PaymentStatus::Cancelled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Authorized => "AUTHORIZED",
            PaymentStatus::Captured => "CAPTURED",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Refunded => "REFUNDED",
            PaymentStatus::Cancelled => "CANCELLED",
        }
    }

    /// Check if this is a terminal state (no further provider callbacks expected)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PaymentStatus::Captured
                | PaymentStatus::Failed
                | PaymentStatus::Refunded
                | PaymentStatus::Cancelled
        )
    }

    /// Check if the payment still blocks the action it is attached to
    pub fn is_outstanding(&self) -> bool {
        matches!(self, PaymentStatus::Pending | PaymentStatus::Authorized)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(PaymentStatus::Pending),
            "AUTHORIZED" => Ok(PaymentStatus::Authorized),
            "CAPTURED" => Ok(PaymentStatus::Captured),
            "FAILED" => Ok(PaymentStatus::Failed),
            "REFUNDED" => Ok(PaymentStatus::Refunded),
            "CANCELLED" => Ok(PaymentStatus::Cancelled),
            _ => Err(UnknownVariantError::new(
                "PaymentStatus",
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
    fn test_payment_status_terminal() {
        assert!(PaymentStatus::Captured.is_terminal());
        assert!(!PaymentStatus::Authorized.is_terminal());
        assert!(PaymentStatus::Authorized.is_outstanding());
    }

    #[test]
    fn test_payment_status_rejects_unknown() {
        let err = "SETTLED".parse::<PaymentStatus>().unwrap_err();
        assert_eq!(err.value, "SETTLED");
        assert!(err.expected.contains(&"CAPTURED"));
    }
}
