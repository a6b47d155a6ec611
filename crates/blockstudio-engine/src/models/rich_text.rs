//! Structured rich-text documents.
//!
//! The editor component that produces these documents owns their schema; this
//! module only knows enough of the node shape (`type`, `content`, `text`) to
//! build the one-paragraph documents legacy migration needs and to extract a
//! plain-text preview.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::parsing::fields::json_type_name;

/// An opaque structured text document (`{"type": "doc", "content": [...]}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(Map<String, Value>);

/// A persisted value that cannot be read as a rich-text document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a rich-text document or string, found {found}")]
pub struct NotRichText {
    pub found: &'static str,
}

impl RichText {
    /// A document with no content.
    pub fn empty() -> Self {
        let mut doc = Map::new();
        doc.insert("type".to_string(), Value::String("doc".to_string()));
        doc.insert("content".to_string(), Value::Array(Vec::new()));
        Self(doc)
    }

    /// A document holding `text` as the single run of a single paragraph.
    ///
    /// Empty text produces [`RichText::empty`].
    pub fn from_plain_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::empty();
        }

        let paragraph = json!({
            "type": "paragraph",
            "content": [{ "type": "text", "text": text }],
        });
        let mut doc = Map::new();
        doc.insert("type".to_string(), Value::String("doc".to_string()));
        doc.insert("content".to_string(), Value::Array(vec![paragraph]));
        Self(doc)
    }

    /// Wrap an already-structured document object without inspecting it.
    pub fn from_object(doc: Map<String, Value>) -> Self {
        Self(doc)
    }

    /// Bring a persisted field value up to the current rich-text shape.
    ///
    /// - a non-empty string becomes a one-paragraph document
    /// - an object is taken as an already-structured document, unchanged
    /// - an empty string, `null` or a missing field becomes an empty document
    ///
    /// Running the result back through `migrate` yields the same document.
    pub fn migrate(value: Option<&Value>) -> Result<Self, NotRichText> {
        match value {
            None | Some(Value::Null) => Ok(Self::empty()),
            Some(Value::String(text)) => Ok(Self::from_plain_text(text)),
            Some(Value::Object(doc)) => Ok(Self(doc.clone())),
            Some(other) => Err(NotRichText {
                found: json_type_name(other),
            }),
        }
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// True when the document contains no text runs.
    pub fn is_empty(&self) -> bool {
        self.plain_text().is_empty()
    }

    /// Concatenated text runs, one line per top-level node.
    pub fn plain_text(&self) -> String {
        let Some(Value::Array(nodes)) = self.0.get("content") else {
            return String::new();
        };

        nodes
            .iter()
            .map(|node| {
                let mut line = String::new();
                collect_text(node, &mut line);
                line
            })
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for RichText {
    fn default() -> Self {
        Self::empty()
    }
}

fn collect_text(node: &Value, out: &mut String) {
    if let Some(Value::String(text)) = node.get("text") {
        out.push_str(text);
    }
    if let Some(Value::Array(children)) = node.get("content") {
        for child in children {
            collect_text(child, out);
        }
    }
}
