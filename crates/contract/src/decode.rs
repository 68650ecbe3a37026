//! Fail-fast deserialization boundary
//!
//! All inbound payloads enter the contract through [`decode_str`] or
//! [`decode_value`]. A payload either decodes to a fully-constructed
//! value or is rejected with a field-attributed [`ApiError`]; a partially
//! constructed value is never observable.
//!
//! serde reports rejections as rendered messages, so classification works
//! on the message text: `missing field` and `unknown variant` carry the
//! offending token in backticks, and unknown enum strings are located in
//! the original payload to recover a field path. Rejections that cannot
//! be attributed to a field are reported against the document root `$`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::{ApiError, ErrorCode, FieldError, FieldErrorCode};

/// Path used when a rejection cannot be attributed to a single field.
const ROOT_PATH: &str = "$";

/// Decode a JSON string into a contract type.
pub fn decode_str<T: DeserializeOwned>(input: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(input).map_err(|e| {
        let detail = FieldError::new(ROOT_PATH, FieldErrorCode::Malformed, clean_message(&e));
        reject(detail)
    })?;
    decode_value(value)
}

/// Decode an already-parsed JSON value into a contract type.
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    match T::deserialize(&value) {
        Ok(decoded) => Ok(decoded),
        Err(e) => Err(reject(classify(&e, &value))),
    }
}

/// Encode a contract type for the response path.
///
/// Contract types serialize infallibly in practice; a failure here is a
/// server-side defect and maps to `internal_error`.
pub fn encode_value<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::new(ErrorCode::InternalError, e.to_string()))
}

fn reject(detail: FieldError) -> ApiError {
    tracing::debug!(
        field = %detail.field,
        code = ?detail.code,
        reason = %detail.message,
        "rejected inbound payload"
    );
    ApiError::validation("request validation failed", vec![detail])
}

/// Classify a serde rejection into a field-attributed error.
fn classify(error: &serde_json::Error, payload: &Value) -> FieldError {
    let message = clean_message(error);

    if let Some(field) = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        return FieldError::new(field, FieldErrorCode::MissingRequired, message.clone());
    }

    if let Some(variant) = message
        .strip_prefix("unknown variant `")
        .and_then(|rest| rest.split('`').next())
    {
        let field = find_string_path(payload, variant).unwrap_or_else(|| ROOT_PATH.to_string());
        return FieldError::new(field, FieldErrorCode::UnknownVariant, message.clone());
    }

    if message.starts_with("invalid type") || message.starts_with("invalid value") {
        return FieldError::new(ROOT_PATH, FieldErrorCode::TypeMismatch, message);
    }

    FieldError::new(ROOT_PATH, FieldErrorCode::Malformed, message)
}

/// Strip the ` at line N column M` suffix serde_json appends.
fn clean_message(error: &serde_json::Error) -> String {
    let rendered = error.to_string();
    match rendered.find(" at line ") {
        Some(idx) => rendered[..idx].to_string(),
        None => rendered,
    }
}

/// Locate the path of a string value inside a payload.
///
/// Used to attribute unknown-variant rejections: the offending wire
/// string is searched for in the original document. First match wins in
/// document order, which is unambiguous for any realistic payload.
fn find_string_path(value: &Value, needle: &str) -> Option<String> {
    fn walk(value: &Value, needle: &str, path: &mut String) -> bool {
        match value {
            Value::String(s) => s == needle,
            Value::Object(map) => {
                for (key, child) in map {
                    let saved = path.len();
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(key);
                    if walk(child, needle, path) {
                        return true;
                    }
                    path.truncate(saved);
                }
                false
            }
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate() {
                    let saved = path.len();
                    path.push_str(&format!("[{}]", i));
                    if walk(child, needle, path) {
                        return true;
                    }
                    path.truncate(saved);
                }
                false
            }
            _ => false,
        }
    }

    let mut path = String::new();
    if walk(value, needle, &mut path) {
        if path.is_empty() {
            Some(ROOT_PATH.to_string())
        } else {
            Some(path)
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use gridfall_domain_types::ItemQuality;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        character_id: String,
        quality: ItemQuality,
    }

    #[test]
    fn test_decode_success() {
        let decoded: Sample =
            decode_value(json!({"characterId": "c1", "quality": "RARE"})).unwrap();
        assert_eq!(decoded.quality, ItemQuality::Rare);
    }

    #[test]
    fn test_missing_required_field_is_attributed() {
        let err = decode_value::<Sample>(json!({"quality": "RARE"})).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.details.len(), 1);
        assert_eq!(err.details[0].field, "characterId");
        assert_eq!(err.details[0].code, FieldErrorCode::MissingRequired);
    }

    #[test]
    fn test_unknown_variant_is_attributed_with_path() {
        let err =
            decode_value::<Sample>(json!({"characterId": "c1", "quality": "legendary"}))
                .unwrap_err();
        assert_eq!(err.details[0].code, FieldErrorCode::UnknownVariant);
        assert_eq!(err.details[0].field, "quality");
        assert!(err.details[0].message.contains("legendary"));
    }

    #[test]
    fn test_type_mismatch_is_classified() {
        let err =
            decode_value::<Sample>(json!({"characterId": 7, "quality": "RARE"})).unwrap_err();
        assert_eq!(err.details[0].code, FieldErrorCode::TypeMismatch);
    }

    #[test]
    fn test_malformed_json_is_rejected_at_root() {
        let err = decode_str::<Sample>("{not json").unwrap_err();
        assert_eq!(err.code, crate::envelope::ErrorCode::ValidationError);
        assert_eq!(err.details[0].field, "$");
        assert_eq!(err.details[0].code, FieldErrorCode::Malformed);
    }

    #[test]
    fn test_nested_unknown_variant_path() {
        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Outer {
            #[allow(dead_code)]
            inner: Sample,
        }

        let err = decode_value::<Outer>(json!({
            "inner": {"characterId": "c1", "quality": "MYTHIC"}
        }))
        .unwrap_err();
        assert_eq!(err.details[0].field, "inner.quality");
    }

    #[test]
    fn test_encode_value_round_trips() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Flat {
            a: u32,
        }
        let value = encode_value(&Flat { a: 3 }).unwrap();
        assert_eq!(value, json!({"a": 3}));
    }
}
