//! JSONB encoding for ordered id sequences

use serde_json::Value;

use crate::error::DomainError;

pub fn encode_ids<I: AsRef<str>>(ids: &[I]) -> Result<Value, DomainError> {
    let ids: Vec<&str> = ids.iter().map(|id| id.as_ref()).collect();
    serde_json::to_value(ids).map_err(|e| DomainError::Database(e.to_string()))
}

/// Malformed values decode as an empty list
pub fn decode_ids<I: From<String>>(value: Value) -> Vec<I> {
    match serde_json::from_value::<Vec<String>>(value) {
        Ok(ids) => ids.into_iter().map(I::from).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored id list is not an array of strings");
            Vec::new()
        }
    }
}
