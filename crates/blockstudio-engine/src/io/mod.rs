//! Writing a [`BlockDocument`] back to its persisted JSON shape.
//!
//! Serialization performs no migration. Each block becomes one object holding
//! its payload fields, its layout settings, any extra fields carried over from
//! parsing, and finally `id` and `type`. Output key order is deterministic.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::editing::document::BlockDocument;
use crate::models::block::ContentBlock;

/// A document that cannot be written out. Nothing is persisted in that case.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("Failed to serialize block {id}: {source}")]
    Json {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Block id {0} appears more than once")]
    DuplicateId(String),
    #[error("Block at index {0} has an empty id")]
    EmptyId(usize),
}

/// Persisted form of `document`: a JSON array of block objects.
pub fn blocks_to_json(document: &BlockDocument) -> Result<Value, SerializeError> {
    let mut seen = HashSet::with_capacity(document.len());
    let mut out = Vec::with_capacity(document.len());

    for (index, block) in document.iter().enumerate() {
        if block.id().as_str().is_empty() {
            return Err(SerializeError::EmptyId(index));
        }
        if !seen.insert(block.id()) {
            return Err(SerializeError::DuplicateId(block.id().to_string()));
        }
        out.push(Value::Object(block_to_object(block)?));
    }

    Ok(Value::Array(out))
}

/// Persisted form of `document` as JSON text.
pub fn blocks_to_string(document: &BlockDocument) -> Result<String, SerializeError> {
    let value = blocks_to_json(document)?;
    serde_json::to_string(&value).map_err(|source| SerializeError::Json {
        id: "-".to_string(),
        source,
    })
}

pub(crate) fn block_to_object(block: &ContentBlock) -> Result<Map<String, Value>, SerializeError> {
    let json_error = |source| SerializeError::Json {
        id: block.id().to_string(),
        source,
    };

    let mut object = block.payload().to_map().map_err(json_error)?;
    block.layout.write_into(&mut object).map_err(json_error)?;
    for (key, value) in block.extra() {
        if !object.contains_key(key) {
            object.insert(key.clone(), value.clone());
        }
    }
    object.insert("id".to_string(), Value::String(block.id().to_string()));
    object.insert("type".to_string(), Value::String(block.kind().as_str().to_string()));
    Ok(object)
}
