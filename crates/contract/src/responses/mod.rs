//! Response payload types, one module per API area

pub mod character;
pub mod crafting;
pub mod quest;
pub mod roll;
pub mod trading;

pub use character::{
    CharacterLifecycleQueues, CharacterResponse, CharacterRestoreResponse,
    CharacterSlotStateResponse, PendingPayment, QueuedLifecycleEntry, SlotInfo,
};
pub use crafting::{CraftingCalculation, CraftingChanceResponse, MissingComponent};
pub use quest::{DialogueChoiceOption, DialogueTurnResponse, QuestStateResponse};
pub use roll::{RollParticipant, RollStateResponse, RollWinner};
pub use trading::{ConvertResponse, ExchangeRateEntry, ExchangeRates, TradeOfferResponse};
