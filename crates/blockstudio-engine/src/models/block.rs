use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::models::kind::BlockKind;
use crate::models::layout::LayoutSettings;
use crate::models::payload::BlockPayload;
use crate::parsing::fields::Fields;

/// Opaque block identifier.
///
/// Freshly created blocks get a v4 UUID; ids read from storage are kept
/// verbatim whatever their format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a block document.
///
/// The kind is carried by the payload variant, so it cannot change without
/// replacing the payload wholesale; [`ContentBlock::set_payload`] refuses to.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    id: BlockId,
    payload: BlockPayload,
    pub layout: LayoutSettings,
    /// Persisted fields this version does not understand, written back as-is.
    extra: Map<String, Value>,
}

impl ContentBlock {
    pub fn new(id: BlockId, payload: BlockPayload) -> Self {
        Self {
            id,
            payload,
            layout: LayoutSettings::default(),
            extra: Map::new(),
        }
    }

    pub(crate) fn from_parts(
        id: BlockId,
        payload: BlockPayload,
        layout: LayoutSettings,
        extra: Map<String, Value>,
    ) -> Self {
        Self {
            id,
            payload,
            layout,
            extra,
        }
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn kind(&self) -> BlockKind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &BlockPayload {
        &self.payload
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Replace the payload, keeping id and kind.
    ///
    /// The new payload is normalized the same way a persisted one is, so
    /// out-of-range numbers are clamped and ragged tables squared up before
    /// they are stored. Returns `false` and leaves the block untouched if
    /// `payload` is of a different kind or cannot be normalized.
    pub fn set_payload(&mut self, payload: BlockPayload) -> bool {
        let kind = self.kind();
        if payload.kind() != kind {
            return false;
        }

        let map = match payload.to_map() {
            Ok(map) => map,
            Err(err) => {
                log::warn!("Payload for block {} not stored: {err}", self.id);
                return false;
            }
        };
        match BlockPayload::normalize(kind, &mut Fields::new(&map)) {
            Ok(normalized) => {
                self.payload = normalized;
                true
            }
            Err(err) => {
                log::warn!("Payload for block {} not stored: {err}", self.id);
                false
            }
        }
    }

    /// Same content under a different id.
    pub(crate) fn with_id(mut self, id: BlockId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payload::{Divider, DividerStyle, FeatureList, SimpleTable, Spacer};

    #[test]
    fn test_generated_ids_are_unique() {
        let a = BlockId::generate();
        let b = BlockId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_set_payload_keeps_kind() {
        let mut block = ContentBlock::new(BlockId::from("a"), BlockPayload::Divider(Divider::default()));

        let changed = block.set_payload(BlockPayload::Divider(Divider {
            style: DividerStyle::Dots,
        }));
        assert!(changed);
        assert_eq!(
            block.payload(),
            &BlockPayload::Divider(Divider {
                style: DividerStyle::Dots
            })
        );

        let changed = block.set_payload(BlockPayload::Spacer(Spacer::default()));
        assert!(!changed);
        assert_eq!(block.kind(), BlockKind::Divider);
    }

    #[test]
    fn test_set_payload_normalizes_like_a_persisted_payload() {
        let mut list = ContentBlock::new(
            BlockId::from("f"),
            BlockPayload::FeatureList(FeatureList::default()),
        );
        assert!(list.set_payload(BlockPayload::FeatureList(FeatureList {
            columns: 0,
            ..Default::default()
        })));
        let BlockPayload::FeatureList(stored) = list.payload() else {
            panic!("expected feature list");
        };
        assert_eq!(stored.columns, 1);

        let mut table = ContentBlock::new(
            BlockId::from("t"),
            BlockPayload::SimpleTable(SimpleTable::default()),
        );
        assert!(table.set_payload(BlockPayload::SimpleTable(SimpleTable {
            headers: vec!["A".to_string()],
            rows: vec![vec!["1".to_string(), "2".to_string()]],
            ..Default::default()
        })));
        let BlockPayload::SimpleTable(stored) = table.payload() else {
            panic!("expected simple table");
        };
        assert_eq!(stored.headers, vec!["A", "Kolumn 2"]);
        assert_eq!(stored.rows, vec![vec!["1", "2"]]);
    }
}
