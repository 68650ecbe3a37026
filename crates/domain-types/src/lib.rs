//! # Gridfall Domain Types
//!
//! Shared wire vocabulary that forms the innermost layer of the contract
//! workspace. Every type here is a closed, string-backed enumeration with
//! one canonical `SCREAMING_SNAKE_CASE` wire string per variant.
//!
//! ## Design Principles
//!
//! 1. **Zero internal crate dependencies** - Only serde, serde_json, thiserror
//! 2. **Closed sets** - unknown wire strings are errors, never a default
//! 3. **Case-sensitive** - `"legendary"` does not parse as `LEGENDARY`
//! 4. **Pure data types** - No I/O, no async, no side effects

mod error;
pub use error::UnknownVariantError;

// Item and crafting vocabulary
mod quality;
pub use quality::ItemQuality;

mod crafting;
pub use crafting::CraftingDiscipline;

// Character lifecycle vocabulary
mod lifecycle;
pub use lifecycle::{CharacterLifecycleState, LockReason};

// Payment vocabulary
mod payment;
pub use payment::PaymentStatus;

// Loot roll vocabulary
mod roll;
pub use roll::{RollDecision, RollMethod, RollState};

// Trade and economy vocabulary
mod trade;
pub use trade::{CurrencyCode, TradeStatus};

// Quest vocabulary
mod quest;
pub use quest::QuestState;
