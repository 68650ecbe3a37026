//! Character lifecycle and lock-reason enumerations
//!
//! A character moves through a soft-delete/restore lifecycle rather than
//! being removed outright. Locks are orthogonal holds applied to an
//! otherwise active character.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UnknownVariantError;

/// Lifecycle state of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterLifecycleState {
    /// Playable, visible to its owner
    Active,
    /// Held by a lock; see the accompanying lock reason
    Locked,
    /// Soft-deleted, eligible for restore within the retention window
    SoftDeleted,
    /// Restore requested, waiting on the lifecycle queue
    PendingRestore,
    /// Retention window elapsed, data removed
    Purged,
}

impl CharacterLifecycleState {
    pub const WIRE_VALUES: &'static [&'static str] = &[
        "ACTIVE",
        "LOCKED",
        "SOFT_DELETED",
        "PENDING_RESTORE",
        "PURGED",
    ];

    pub fn all() -> &'static [CharacterLifecycleState] {
        &[
            CharacterLifecycleState::Active,
            CharacterLifecycleState::Locked,
            CharacterLifecycleState::SoftDeleted,
            CharacterLifecycleState::PendingRestore,
            CharacterLifecycleState::Purged,
        ]
    }

    /// Get the canonical wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterLifecycleState::Active => "ACTIVE",
            CharacterLifecycleState::Locked => "LOCKED",
            CharacterLifecycleState::SoftDeleted => "SOFT_DELETED",
            CharacterLifecycleState::PendingRestore => "PENDING_RESTORE",
            CharacterLifecycleState::Purged => "PURGED",
        }
    }

    /// Check if this is a terminal state (no further transitions expected)
    pub fn is_terminal(&self) -> bool {
        matches!(self, CharacterLifecycleState::Purged)
    }

    /// Check if the character can still be restored
    pub fn is_restorable(&self) -> bool {
        matches!(
            self,
            CharacterLifecycleState::SoftDeleted | CharacterLifecycleState::PendingRestore
        )
    }
}

impl fmt::Display for CharacterLifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CharacterLifecycleState {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(CharacterLifecycleState::Active),
            "LOCKED" => Ok(CharacterLifecycleState::Locked),
            "SOFT_DELETED" => Ok(CharacterLifecycleState::SoftDeleted),
            "PENDING_RESTORE" => Ok(CharacterLifecycleState::PendingRestore),
            "PURGED" => Ok(CharacterLifecycleState::Purged),
            _ => Err(UnknownVariantError::new(
                "CharacterLifecycleState",
                s,
                Self::WIRE_VALUES,
            )),
        }
    }
}

/// Reason a character or slot is locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LockReason {
    /// A slot payment is overdue
    PaymentDue,
    /// Held for moderation review
    ModerationHold,
    /// The owner asked for the lock
    OwnerRequest,
    /// The slot subscription expired
    SlotExpired,
    /// Held pending a security review of the account
    SecurityReview,
}

impl LockReason {
    pub const WIRE_VALUES: &'static [&'static str] = &[
        "PAYMENT_DUE",
        "MODERATION_HOLD",
        "OWNER_REQUEST",
        "SLOT_EXPIRED",
        "SECURITY_REVIEW",
    ];

    pub fn all() -> &'static [LockReason] {
        &[
            LockReason::PaymentDue,
            LockReason::ModerationHold,
            LockReason::OwnerRequest,
            LockReason::SlotExpired,
            LockReason::SecurityReview,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LockReason::PaymentDue => "PAYMENT_DUE",
            LockReason::ModerationHold => "MODERATION_HOLD",
            LockReason::OwnerRequest => "OWNER_REQUEST",
            LockReason::SlotExpired => "SLOT_EXPIRED",
            LockReason::SecurityReview => "SECURITY_REVIEW",
        }
    }

    /// Check if the owner can clear this lock themselves
    pub fn is_owner_clearable(&self) -> bool {
        matches!(self, LockReason::OwnerRequest)
    }
}

impl fmt::Display for LockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LockReason {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAYMENT_DUE" => Ok(LockReason::PaymentDue),
            "MODERATION_HOLD" => Ok(LockReason::ModerationHold),
            "OWNER_REQUEST" => Ok(LockReason::OwnerRequest),
            "SLOT_EXPIRED" => Ok(LockReason::SlotExpired),
            "SECURITY_REVIEW" => Ok(LockReason::SecurityReview),
            _ => Err(UnknownVariantError::new("LockReason", s, Self::WIRE_VALUES)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_parse() {
        assert_eq!(
            "SOFT_DELETED".parse::<CharacterLifecycleState>().unwrap(),
            CharacterLifecycleState::SoftDeleted
        );
        assert!("soft_deleted".parse::<CharacterLifecycleState>().is_err());
    }

    #[test]
    fn test_lifecycle_terminal_and_restorable() {
        assert!(CharacterLifecycleState::Purged.is_terminal());
        assert!(!CharacterLifecycleState::Purged.is_restorable());
        assert!(CharacterLifecycleState::SoftDeleted.is_restorable());
    }

    #[test]
    fn test_lock_reason_wire_strings() {
        for reason in LockReason::all() {
            let json = serde_json::to_string(reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.as_str()));
        }
    }
}
