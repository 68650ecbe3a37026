//! Response envelopes and the structured error shape
//!
//! Successful responses travel as `{data, meta}`; failures travel as a
//! `{code, message, details}` envelope where `details` attributes each
//! problem to a field path. Both shapes are wire contracts shared with
//! every client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presence::Presence;

// =============================================================================
// Success Envelope
// =============================================================================

/// Standard `{data, meta}` wrapper for successful responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub data: T,
    pub meta: ResponseMeta,
}

impl<T> Envelope<T> {
    pub fn new(data: T, meta: ResponseMeta) -> Self {
        Self { data, meta }
    }
}

/// Per-response metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    /// Correlation id assigned by the server
    pub request_id: Uuid,
    pub server_time: DateTime<Utc>,
    /// Pagination info, only on list responses
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub page: Presence<PageInfo>,
}

impl ResponseMeta {
    pub fn new(request_id: Uuid, server_time: DateTime<Utc>) -> Self {
        Self {
            request_id,
            server_time,
            page: Presence::Missing,
        }
    }
}

/// Cursor pagination block inside [`ResponseMeta`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Opaque cursor for the next page; null on the last page
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub cursor: Presence<String>,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Presence::is_missing")]
    pub total: Presence<u64>,
}

// =============================================================================
// Error Envelope
// =============================================================================

/// Structured API error: `{code, message, details}`
///
/// `details` is empty for non-validation failures. For validation
/// failures it carries one entry per rejected field so clients can
/// surface per-field feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Create a validation error with field-attributed details
    pub fn validation(message: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self {
            code: ErrorCode::ValidationError,
            message: message.into(),
            details,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.code, ErrorCode::ValidationError)
    }
}

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Request was malformed or invalid
    BadRequest,
    /// Request data failed validation
    ValidationError,
    /// Authentication required or failed
    Unauthorized,
    /// User lacks permission for this operation
    Forbidden,
    /// Requested resource not found
    NotFound,
    /// Operation conflicts with current state
    Conflict,
    /// Rate limit exceeded
    RateLimited,
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "bad_request",
            ErrorCode::ValidationError => "validation_error",
            ErrorCode::Unauthorized => "unauthorized",
            ErrorCode::Forbidden => "forbidden",
            ErrorCode::NotFound => "not_found",
            ErrorCode::Conflict => "conflict",
            ErrorCode::RateLimited => "rate_limited",
            ErrorCode::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One field-attributed validation problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Path of the rejected field, e.g. `config.timeoutSeconds`
    pub field: String,
    pub code: FieldErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

/// Machine code for a single field rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    /// A required field was absent
    MissingRequired,
    /// A closed-enum field carried an unrecognized string
    UnknownVariant,
    /// The JSON type did not match the field type
    TypeMismatch,
    /// Anything else the decoder rejected
    Malformed,
}
