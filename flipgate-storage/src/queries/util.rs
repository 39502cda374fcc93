//! Shared row-mapping helpers for the query modules.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use flipgate_core::errors::StorageError;

pub(crate) fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::Sqlite {
        message: e.to_string(),
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::Serialization {
        message: e.to_string(),
    })
}

pub(crate) fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, StorageError> {
    serde_json::from_str(text).map_err(|e| StorageError::Serialization {
        message: e.to_string(),
    })
}

/// Serialize a unit-variant enum to its wire string ("proposed", "flip").
pub(crate) fn enum_to_str<T: Serialize>(value: &T) -> Result<String, StorageError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => Ok(s),
        Ok(other) => Err(StorageError::Serialization {
            message: format!("expected string-encoded enum, got {other}"),
        }),
        Err(e) => Err(StorageError::Serialization {
            message: e.to_string(),
        }),
    }
}

/// Parse a unit-variant enum from its wire string.
pub(crate) fn enum_from_str<T: DeserializeOwned>(
    text: &str,
) -> Result<T, StorageError> {
    serde_json::from_value(serde_json::Value::String(text.to_string())).map_err(
        |e| StorageError::Serialization {
            message: format!("bad enum value '{text}': {e}"),
        },
    )
}

pub(crate) fn format_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

pub(crate) fn parse_ts(text: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::Serialization {
            message: format!("bad timestamp '{text}': {e}"),
        })
}

pub(crate) fn parse_opt_ts(
    text: Option<String>,
) -> Result<Option<DateTime<Utc>>, StorageError> {
    text.map(|t| parse_ts(&t)).transpose()
}

pub(crate) fn parse_uuid(text: &str) -> Result<Uuid, StorageError> {
    Uuid::parse_str(text).map_err(|e| StorageError::Serialization {
        message: format!("bad uuid '{text}': {e}"),
    })
}
