//! Request payload types, one module per API area

pub mod character;
pub mod crafting;
pub mod quest;
pub mod roll;
pub mod slots;
pub mod trading;

pub use character::{
    CreateCharacterRequest, DeleteCharacterRequest, LockCharacterRequest, RestoreCharacterRequest,
    UpdateCharacterRequest,
};
pub use crafting::{CalculateCraftingChanceRequest, CraftCommitRequest};
pub use quest::{AcceptQuestRequest, DialogueChoiceRequest, TurnInQuestRequest};
pub use roll::{RollConfig, RollDecisionRequest, RollStartRequest};
pub use slots::{PurchaseSlotRequest, SlotPaymentCallbackRequest};
pub use trading::{ConvertRequest, TradeConfirmRequest, TradeOfferRequest};
