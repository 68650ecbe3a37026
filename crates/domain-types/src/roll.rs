//! Loot roll vocabulary
//!
//! A roll is opened over a loot drop, collects decisions from eligible
//! characters, and resolves to a winner. The arbitration itself lives in
//! the backend service; these are the wire states it reports.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UnknownVariantError;

/// State of a loot roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RollState {
    /// Accepting decisions
    Open,
    /// Decisions closed, resolution in progress
    Locked,
    /// Winner determined
    Resolved,
    /// Cancelled by the master looter or the server
    Cancelled,
    /// Timed out before enough decisions arrived
    Expired,
}

impl RollState {
    pub const WIRE_VALUES: &'static [&'static str] =
        &["OPEN", "LOCKED", "RESOLVED", "CANCELLED", "EXPIRED"];

    pub fn all() -> &'static [RollState] {
        &[
            RollState::Open,
            RollState::Locked,
            RollState::Resolved,
            RollState::Cancelled,
            RollState::Expired,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RollState::Open => "OPEN",
            RollState::Locked => "LOCKED",
            RollState::Resolved => "RESOLVED",
            RollState::Cancelled => "CANCELLED",
            RollState::Expired => "EXPIRED",
        }
    }

    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RollState::Resolved | RollState::Cancelled | RollState::Expired
        )
    }

    /// Check if decisions are still being accepted
    pub fn accepts_decisions(&self) -> bool {
        matches!(self, RollState::Open)
    }
}

impl fmt::Display for RollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RollState {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(RollState::Open),
            "LOCKED" => Ok(RollState::Locked),
            "RESOLVED" => Ok(RollState::Resolved),
            "CANCELLED" => Ok(RollState::Cancelled),
            "EXPIRED" => Ok(RollState::Expired),
            _ => Err(UnknownVariantError::new("RollState", s, Self::WIRE_VALUES)),
        }
    }
}

/// Distribution method configured for a roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RollMethod {
    /// Need decisions beat greed decisions
    NeedBeforeGreed,
    /// Drops rotate through the party in order
    RoundRobin,
    /// First claim wins
    FreeForAll,
    /// A designated character assigns the drop
    MasterLooter,
}

impl RollMethod {
    pub const WIRE_VALUES: &'static [&'static str] = &[
        "NEED_BEFORE_GREED",
        "ROUND_ROBIN",
        "FREE_FOR_ALL",
        "MASTER_LOOTER",
    ];

    pub fn all() -> &'static [RollMethod] {
        &[
            RollMethod::NeedBeforeGreed,
            RollMethod::RoundRobin,
            RollMethod::FreeForAll,
            RollMethod::MasterLooter,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RollMethod::NeedBeforeGreed => "NEED_BEFORE_GREED",
            RollMethod::RoundRobin => "ROUND_ROBIN",
            RollMethod::FreeForAll => "FREE_FOR_ALL",
            RollMethod::MasterLooter => "MASTER_LOOTER",
        }
    }

    /// Check if this method requires a designated master looter
    pub fn requires_master_looter(&self) -> bool {
        matches!(self, RollMethod::MasterLooter)
    }
}

impl fmt::Display for RollMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RollMethod {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEED_BEFORE_GREED" => Ok(RollMethod::NeedBeforeGreed),
            "ROUND_ROBIN" => Ok(RollMethod::RoundRobin),
            "FREE_FOR_ALL" => Ok(RollMethod::FreeForAll),
            "MASTER_LOOTER" => Ok(RollMethod::MasterLooter),
            _ => Err(UnknownVariantError::new("RollMethod", s, Self::WIRE_VALUES)),
        }
    }
}

/// A participant's decision on an open roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RollDecision {
    Need,
    Greed,
    Pass,
}

impl RollDecision {
    pub const WIRE_VALUES: &'static [&'static str] = &["NEED", "GREED", "PASS"];

    pub fn all() -> &'static [RollDecision] {
        &[RollDecision::Need, RollDecision::Greed, RollDecision::Pass]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RollDecision::Need => "NEED",
            RollDecision::Greed => "GREED",
            RollDecision::Pass => "PASS",
        }
    }
}

impl fmt::Display for RollDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RollDecision {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEED" => Ok(RollDecision::Need),
            "GREED" => Ok(RollDecision::Greed),
            "PASS" => Ok(RollDecision::Pass),
            _ => Err(UnknownVariantError::new(
                "RollDecision",
                s,
                Self::WIRE_VALUES,
            )),
        }
    }
}
