//! Quest and dialogue request payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;

/// Accept a quest offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptQuestRequest {
    pub character_id: Uuid,
    /// Quest key from the content catalog, e.g. `q1`
    pub quest_id: String,
    /// NPC the offer came from; omitted when accepted from the journal
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub from_npc_id: Presence<Uuid>,
}

impl AcceptQuestRequest {
    pub fn new(character_id: Uuid, quest_id: impl Into<String>) -> Self {
        Self {
            character_id,
            quest_id: quest_id.into(),
            from_npc_id: Presence::Missing,
        }
    }
}

/// Turn in a completed quest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnInQuestRequest {
    pub character_id: Uuid,
    pub quest_id: String,
    /// Chosen reward when the quest offers a choice
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub reward_choice_id: Presence<Uuid>,
}

impl TurnInQuestRequest {
    pub fn new(character_id: Uuid, quest_id: impl Into<String>) -> Self {
        Self {
            character_id,
            quest_id: quest_id.into(),
            reward_choice_id: Presence::Missing,
        }
    }
}

/// Pick a dialogue choice at the current conversation node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueChoiceRequest {
    pub character_id: Uuid,
    pub conversation_id: Uuid,
    pub node_id: String,
    pub choice_id: String,
}

impl DialogueChoiceRequest {
    pub fn new(
        character_id: Uuid,
        conversation_id: Uuid,
        node_id: impl Into<String>,
        choice_id: impl Into<String>,
    ) -> Self {
        Self {
            character_id,
            conversation_id,
            node_id: node_id.into(),
            choice_id: choice_id.into(),
        }
    }
}
