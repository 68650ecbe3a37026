//! Tri-state field presence
//!
//! JSON payloads distinguish a key that was omitted from a key that was
//! explicitly sent as `null`. An `Option<T>` collapses the two, so every
//! tri-state field in the contract uses [`Presence<T>`] instead:
//!
//! - `Missing` - the key was not in the payload
//! - `Null` - the key was sent as an explicit `null`
//! - `Present(value)` - the key carried a value
//!
//! Declare fields as:
//!
//! ```ignore
//! #[serde(default, skip_serializing_if = "Presence::is_missing")]
//! pub from_npc_id: Presence<Uuid>,
//! ```
//!
//! `#[serde(default)]` maps an omitted key to `Missing`, and the skip
//! attribute keeps `Missing` fields out of the encoded payload entirely.
//! Without the skip attribute a `Missing` field would encode as `null`
//! and stop round-tripping.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Presence state of a tri-state optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence<T> {
    /// Key omitted from the payload
    Missing,
    /// Key sent as an explicit JSON `null`
    Null,
    /// Key carried a value
    Present(T),
}

impl<T> Presence<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Presence::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Presence::Null)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present(_))
    }

    /// Borrow the inner value if present
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Presence::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Consume into the inner value if present
    ///
    /// Collapses the Missing/Null distinction; use only where the caller
    /// genuinely does not care which of the two it was.
    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Map the inner value, preserving the presence state
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Presence<U> {
        match self {
            Presence::Missing => Presence::Missing,
            Presence::Null => Presence::Null,
            Presence::Present(value) => Presence::Present(f(value)),
        }
    }

    /// Get the inner value or a fallback
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Presence::Present(value) => value,
            _ => default,
        }
    }

    pub fn as_ref(&self) -> Presence<&T> {
        match self {
            Presence::Missing => Presence::Missing,
            Presence::Null => Presence::Null,
            Presence::Present(value) => Presence::Present(value),
        }
    }
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Presence::Missing
    }
}

/// `None` maps to an explicit `Null`, never to `Missing`.
impl<T> From<Option<T>> for Presence<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Presence::Present(value),
            None => Presence::Null,
        }
    }
}

impl<T> From<T> for Presence<T> {
    fn from(value: T) -> Self {
        Presence::Present(value)
    }
}

impl<T: Serialize> Serialize for Presence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Missing is expected to be skipped by the field attribute;
            // if it reaches the serializer anyway it degrades to null.
            Presence::Missing | Presence::Null => serializer.serialize_none(),
            Presence::Present(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Presence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only ever invoked when the key exists in the payload, so the
        // result is Null or Present; Missing comes from #[serde(default)].
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
