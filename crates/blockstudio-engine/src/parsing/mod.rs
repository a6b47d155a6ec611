//! Reading persisted block arrays into a [`BlockDocument`].
//!
//! Parsing never fails. Anything that cannot become a well-formed block is
//! dropped on its own, logged, and recorded as a [`Diagnostic`]; the rest of
//! the document is kept. Legacy field shapes are migrated on the way in (see
//! [`fields`]), so a parsed document always satisfies the model invariants:
//! unique non-empty ids, one payload per block matching its kind, and fully
//! defaulted layout settings.

pub mod fields;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::editing::document::BlockDocument;
use crate::models::block::{BlockId, ContentBlock};
use crate::models::kind::BlockKind;
use crate::models::layout::LayoutSettings;
use crate::models::payload::BlockPayload;
use fields::{FieldError, Fields, json_type_name};

/// Keys every persisted block carries outside its payload.
const IDENTITY_KEYS: [&str; 2] = ["id", "type"];

/// What went wrong with one element of a persisted block array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticKind {
    #[error("persisted blocks are {found}, not an array")]
    NotAnArray { found: &'static str },
    #[error("persisted blocks are not valid JSON: {message}")]
    InvalidJson { message: String },
    #[error("block is {found}, not an object")]
    NotAnObject { found: &'static str },
    #[error("block has no type")]
    MissingType,
    #[error("unrecognized block type `{type_name}`")]
    UnrecognizedKind { type_name: String },
    #[error("malformed payload: {error}")]
    MalformedPayload { error: FieldError },
    #[error("block had no id, assigned a fresh one")]
    MissingId,
    #[error("id `{original}` already used by an earlier block, assigned a fresh one")]
    DuplicateId { original: String },
}

impl DiagnosticKind {
    /// Whether the element was left out of the document.
    pub fn dropped(&self) -> bool {
        !matches!(self, DiagnosticKind::MissingId | DiagnosticKind::DuplicateId { .. })
    }
}

/// One parse-time anomaly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Position in the persisted array; `None` for problems with the array itself.
    pub index: Option<usize>,
    /// The persisted id, when there was a usable one.
    pub id: Option<String>,
    pub kind: DiagnosticKind,
}

/// A parsed document plus everything that had to be dropped or repaired.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseReport {
    pub document: BlockDocument,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    pub fn dropped(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics.iter().filter(|d| d.kind.dropped())
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        let index = diagnostic
            .index
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        let id = diagnostic.id.as_deref().unwrap_or("-");
        if diagnostic.kind.dropped() {
            log::warn!("Dropped persisted block (index {index}, id {id}): {}", diagnostic.kind);
        } else {
            log::warn!("Repaired persisted block (index {index}, id {id}): {}", diagnostic.kind);
        }
        self.diagnostics.push(diagnostic);
    }
}

/// Parse a persisted block array, discarding diagnostics.
pub fn parse_blocks(raw: &Value) -> BlockDocument {
    parse_blocks_with_report(raw).document
}

/// Parse persisted JSON text. Invalid JSON yields an empty document.
pub fn parse_blocks_str(raw: &str) -> ParseReport {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => parse_blocks_with_report(&value),
        Err(err) => {
            let mut report = ParseReport::default();
            report.record(Diagnostic {
                index: None,
                id: None,
                kind: DiagnosticKind::InvalidJson {
                    message: err.to_string(),
                },
            });
            report
        }
    }
}

pub fn parse_blocks_with_report(raw: &Value) -> ParseReport {
    let mut report = ParseReport::default();

    let Value::Array(elements) = raw else {
        // A never-saved content record stores null rather than an empty array
        if !raw.is_null() {
            report.record(Diagnostic {
                index: None,
                id: None,
                kind: DiagnosticKind::NotAnArray {
                    found: json_type_name(raw),
                },
            });
        }
        return report;
    };

    let mut seen: HashSet<BlockId> = HashSet::with_capacity(elements.len());
    let mut blocks = Vec::with_capacity(elements.len());

    for (index, element) in elements.iter().enumerate() {
        let persisted_id = persisted_id(element);
        let block = match parse_element(element) {
            Ok(block) => block,
            Err(kind) => {
                report.record(Diagnostic {
                    index: Some(index),
                    id: persisted_id,
                    kind,
                });
                continue;
            }
        };

        let block = match persisted_id {
            None => {
                report.record(Diagnostic {
                    index: Some(index),
                    id: None,
                    kind: DiagnosticKind::MissingId,
                });
                block.with_id(BlockId::generate())
            }
            Some(id) if seen.contains(&BlockId::from(id.as_str())) => {
                report.record(Diagnostic {
                    index: Some(index),
                    id: Some(id.clone()),
                    kind: DiagnosticKind::DuplicateId { original: id },
                });
                block.with_id(BlockId::generate())
            }
            Some(id) => block.with_id(BlockId::from(id)),
        };

        seen.insert(block.id().clone());
        blocks.push(block);
    }

    report.document = BlockDocument::from_blocks(blocks);
    report
}

/// A usable persisted id: a non-empty string.
fn persisted_id(element: &Value) -> Option<String> {
    match element.get("id") {
        Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
        _ => None,
    }
}

/// Parse one element. The returned block carries a placeholder id.
fn parse_element(element: &Value) -> Result<ContentBlock, DiagnosticKind> {
    let Value::Object(object) = element else {
        return Err(DiagnosticKind::NotAnObject {
            found: json_type_name(element),
        });
    };

    let type_name = match object.get("type") {
        Some(Value::String(type_name)) if !type_name.is_empty() => type_name,
        _ => return Err(DiagnosticKind::MissingType),
    };
    let kind = type_name
        .parse::<BlockKind>()
        .map_err(|_| DiagnosticKind::UnrecognizedKind {
            type_name: type_name.clone(),
        })?;

    normalize_block(BlockId::from(""), kind, object)
        .map_err(|error| DiagnosticKind::MalformedPayload { error })
}

/// Normalize a persisted block object of a known kind.
///
/// `id` and `type` in `object` are ignored; every key neither the payload
/// nor the layout settings understand ends up in the block's extra fields.
pub(crate) fn normalize_block(
    id: BlockId,
    kind: BlockKind,
    object: &Map<String, Value>,
) -> Result<ContentBlock, FieldError> {
    let mut fields = Fields::new(object);
    let payload = BlockPayload::normalize(kind, &mut fields)?;
    let layout = LayoutSettings::normalize(&mut fields)?;
    let extra = fields.unconsumed(&IDENTITY_KEYS);
    Ok(ContentBlock::from_parts(id, payload, layout, extra))
}
