//! Quest state enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UnknownVariantError;

/// State of a quest for a specific character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestState {
    /// Offered by an NPC, not yet accepted
    Offered,
    /// Accepted, no objective progress yet
    Accepted,
    /// At least one objective in progress
    InProgress,
    /// All objectives met, reward not yet collected
    ReadyToTurnIn,
    /// Turned in, rewards granted
    Completed,
    /// Failed an objective or deadline
    Failed,
    /// Abandoned by the character
    Abandoned,
}

impl QuestState {
    pub const WIRE_VALUES: &'static [&'static str] = &[
        "OFFERED",
        "ACCEPTED",
        "IN_PROGRESS",
        "READY_TO_TURN_IN",
        "COMPLETED",
        "FAILED",
        "ABANDONED",
    ];

    pub fn all() -> &'static [QuestState] {
        &[
            QuestState::Offered,
            QuestState::Accepted,
            QuestState::InProgress,
            QuestState::ReadyToTurnIn,
            QuestState::Completed,
            QuestState::Failed,
            QuestState::Abandoned,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestState::Offered => "OFFERED",
            QuestState::Accepted => "ACCEPTED",
            QuestState::InProgress => "IN_PROGRESS",
            QuestState::ReadyToTurnIn => "READY_TO_TURN_IN",
            QuestState::Completed => "COMPLETED",
            QuestState::Failed => "FAILED",
            QuestState::Abandoned => "ABANDONED",
        }
    }

    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            QuestState::Completed | QuestState::Failed | QuestState::Abandoned
        )
    }

    /// Check if the quest is actively held by the character
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            QuestState::Accepted | QuestState::InProgress | QuestState::ReadyToTurnIn
        )
    }
}

impl fmt::Display for QuestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestState {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OFFERED" => Ok(QuestState::Offered),
            "ACCEPTED" => Ok(QuestState::Accepted),
            "IN_PROGRESS" => Ok(QuestState::InProgress),
            "READY_TO_TURN_IN" => Ok(QuestState::ReadyToTurnIn),
            "COMPLETED" => Ok(QuestState::Completed),
            "FAILED" => Ok(QuestState::Failed),
            "ABANDONED" => Ok(QuestState::Abandoned),
            _ => Err(UnknownVariantError::new("QuestState", s, Self::WIRE_VALUES)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quest_state_parse() {
        assert_eq!(
            "READY_TO_TURN_IN".parse::<QuestState>().unwrap(),
            QuestState::ReadyToTurnIn
        );
        assert!("ready_to_turn_in".parse::<QuestState>().is_err());
    }

    #[test]
    fn test_quest_state_active_vs_terminal() {
        assert!(QuestState::InProgress.is_active());
        assert!(!QuestState::Offered.is_active());
        assert!(QuestState::Abandoned.is_terminal());
    }
}
