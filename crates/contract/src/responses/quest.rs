//! Quest and dialogue response payloads

use chrono::{DateTime, Utc};
use gridfall_domain_types::QuestState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;

/// State of a quest for a character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestStateResponse {
    pub quest_id: String,
    pub character_id: Uuid,
    pub state: QuestState,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub accepted_at: Presence<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub completed_at: Presence<DateTime<Utc>>,
    /// NPC the quest was accepted from; null when accepted from the journal
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub from_npc_id: Presence<Uuid>,
}

/// One turn of a dialogue, as presented to the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueTurnResponse {
    pub conversation_id: Uuid,
    pub node_id: String,
    /// Speaking NPC; omitted for narrator lines
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub speaker_npc_id: Presence<Uuid>,
    pub text: String,
    #[serde(default)]
    pub choices: Vec<DialogueChoiceOption>,
}

/// One selectable dialogue choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueChoiceOption {
    pub choice_id: String,
    pub text: String,
    /// Next node; null ends the conversation
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub leads_to_node_id: Presence<String>,
    /// Gate: only shown when the character's quest is in this state
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub requires_quest_state: Presence<QuestState>,
}
