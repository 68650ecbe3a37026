//! Gridfall Contract - wire types for the game backend API
//!
//! This crate contains every request/response payload shape exchanged
//! with the Gridfall backend: character lifecycle, character slots and
//! payments, crafting calculations, loot rolls, trading/conversion, and
//! quest/dialogue flows.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - serde, serde_json, uuid, chrono,
//!    thiserror, tracing, and the vocabulary crate
//! 2. **No business logic** - pure data types, serialization, and
//!    decode-time validation; computed values travel verbatim
//! 3. **Presence-aware fields** - tri-state optionals use [`Presence`],
//!    never a bare `Option` that collapses omitted and null
//! 4. **No domain IDs** - raw `uuid::Uuid` in DTOs
//! 5. **Fail-fast boundary** - a payload decodes fully or is rejected
//!    with a field-attributed error; nothing partial escapes

pub mod decode;
pub mod envelope;
pub mod presence;
pub mod requests;
pub mod responses;
pub mod types;

// =============================================================================
// Presence and decode boundary
// =============================================================================
pub use decode::{decode_str, decode_value, encode_value};
pub use presence::Presence;

// =============================================================================
// Envelopes
// =============================================================================
pub use envelope::{
    ApiError, Envelope, ErrorCode, FieldError, FieldErrorCode, PageInfo, ResponseMeta,
};

// =============================================================================
// Shared value shapes
// =============================================================================
pub use types::{CharacterAttributes, FundsDelta};

// =============================================================================
// Request Types
// =============================================================================
pub use requests::{
    AcceptQuestRequest,
    CalculateCraftingChanceRequest,
    ConvertRequest,
    CraftCommitRequest,
    // Character lifecycle
    CreateCharacterRequest,
    DeleteCharacterRequest,
    DialogueChoiceRequest,
    LockCharacterRequest,
    // Slots and payments
    PurchaseSlotRequest,
    RestoreCharacterRequest,
    // Loot rolls
    RollConfig,
    RollDecisionRequest,
    RollStartRequest,
    SlotPaymentCallbackRequest,
    // Trading
    TradeConfirmRequest,
    TradeOfferRequest,
    // Quests and dialogue
    TurnInQuestRequest,
    UpdateCharacterRequest,
};

// =============================================================================
// Response Types
// =============================================================================
pub use responses::{
    // Character lifecycle and slots
    CharacterLifecycleQueues,
    CharacterResponse,
    CharacterRestoreResponse,
    CharacterSlotStateResponse,
    ConvertResponse,
    // Crafting
    CraftingCalculation,
    CraftingChanceResponse,
    DialogueChoiceOption,
    DialogueTurnResponse,
    // Trading
    ExchangeRateEntry,
    ExchangeRates,
    MissingComponent,
    PendingPayment,
    QueuedLifecycleEntry,
    // Quests and dialogue
    QuestStateResponse,
    // Loot rolls
    RollParticipant,
    RollStateResponse,
    RollWinner,
    SlotInfo,
    TradeOfferResponse,
};
