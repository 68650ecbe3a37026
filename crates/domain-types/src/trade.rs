//! Trade and economy vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UnknownVariantError;

/// Status of a player-to-player trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    /// Being assembled by the initiator
    Draft,
    /// Sent to the recipient
    Proposed,
    /// Recipient accepted the terms
    Accepted,
    /// Both parties confirmed, awaiting settlement
    Confirmed,
    /// Items and funds exchanged
    Settled,
    /// Recipient declined
    Declined,
    /// Timed out before confirmation
    Expired,
}

impl TradeStatus {
    pub const WIRE_VALUES: &'static [&'static str] = &[
        "DRAFT",
        "PROPOSED",
        "ACCEPTED",
        "CONFIRMED",
        "SETTLED",
        "DECLINED",
        "EXPIRED",
    ];

    pub fn all() -> &'static [TradeStatus] {
        &[
            TradeStatus::Draft,
            TradeStatus::Proposed,
            TradeStatus::Accepted,
            TradeStatus::Confirmed,
            TradeStatus::Settled,
            TradeStatus::Declined,
            TradeStatus::Expired,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeStatus::Draft => "DRAFT",
            TradeStatus::Proposed => "PROPOSED",
            TradeStatus::Accepted => "ACCEPTED",
            TradeStatus::Confirmed => "CONFIRMED",
            TradeStatus::Settled => "SETTLED",
            TradeStatus::Declined => "DECLINED",
            TradeStatus::Expired => "EXPIRED",
        }
    }

    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TradeStatus::Settled | TradeStatus::Declined | TradeStatus::Expired
        )
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TradeStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(TradeStatus::Draft),
            "PROPOSED" => Ok(TradeStatus::Proposed),
            "ACCEPTED" => Ok(TradeStatus::Accepted),
            "CONFIRMED" => Ok(TradeStatus::Confirmed),
            "SETTLED" => Ok(TradeStatus::Settled),
            "DECLINED" => Ok(TradeStatus::Declined),
            "EXPIRED" => Ok(TradeStatus::Expired),
            _ => Err(UnknownVariantError::new(
                "TradeStatus",
                s,
                Self::WIRE_VALUES,
            )),
        }
    }
}

/// Currency a wallet balance or price is denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrencyCode {
    /// Standard bank-backed currency
    Credits,
    /// Street currency, not bank convertible
    Scrip,
    /// Corporation-issued loyalty token
    CorpToken,
    /// Reputation currency earned through fixers
    StreetCred,
}

impl CurrencyCode {
    pub const WIRE_VALUES: &'static [&'static str] =
        &["CREDITS", "SCRIP", "CORP_TOKEN", "STREET_CRED"];

    pub fn all() -> &'static [CurrencyCode] {
        &[
            CurrencyCode::Credits,
            CurrencyCode::Scrip,
            CurrencyCode::CorpToken,
            CurrencyCode::StreetCred,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Credits => "CREDITS",
            CurrencyCode::Scrip => "SCRIP",
            CurrencyCode::CorpToken => "CORP_TOKEN",
            CurrencyCode::StreetCred => "STREET_CRED",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREDITS" => Ok(CurrencyCode::Credits),
            "SCRIP" => Ok(CurrencyCode::Scrip),
            "CORP_TOKEN" => Ok(CurrencyCode::CorpToken),
            "STREET_CRED" => Ok(CurrencyCode::StreetCred),
            _ => Err(UnknownVariantError::new(
                "CurrencyCode",
                s,
                Self::WIRE_VALUES,
            )),
        }
    }
}
