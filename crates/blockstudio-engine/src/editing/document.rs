use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::factory::duplicate_block;
use crate::io::block_to_object;
use crate::models::block::{BlockId, ContentBlock};
use crate::models::layout::{LAYOUT_KEYS, LayoutSettings};
use crate::models::payload::BlockPayload;
use crate::parsing::normalize_block;

/// An ordered sequence of blocks; the authoring state of one content record.
///
/// Block ids are unique within a document. Position in the sequence is the
/// only ordering there is.
///
/// Every mutation takes `&self` and returns a new document. Mutations are
/// total: a stale id or an out-of-range index leaves the document unchanged
/// (see the individual methods for how indices are clamped).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockDocument {
    blocks: Vec<ContentBlock>,
}

impl BlockDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from `blocks`, re-keying any block whose id is empty
    /// or already used by an earlier block.
    pub fn from_blocks(blocks: Vec<ContentBlock>) -> Self {
        let mut seen = HashSet::with_capacity(blocks.len());
        let blocks = blocks
            .into_iter()
            .map(|block| {
                let block = if block.id().as_str().is_empty() || seen.contains(block.id()) {
                    log::debug!("Re-keying block with id {:?}", block.id().as_str());
                    block.with_id(BlockId::generate())
                } else {
                    block
                };
                seen.insert(block.id().clone());
                block
            })
            .collect();
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&ContentBlock> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentBlock> {
        self.blocks.iter()
    }

    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|block| block.id().clone()).collect()
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<ContentBlock> {
        self.blocks
    }

    /// Insert `block` at `index`, or append when `index` is `None` or past
    /// the end. A block whose id is already taken is inserted under a fresh id.
    pub fn insert(&self, block: ContentBlock, index: Option<usize>) -> Self {
        let block = if block.id().as_str().is_empty() || self.get(block.id()).is_some() {
            log::debug!("Inserted block id {:?} is taken, re-keying", block.id().as_str());
            block.with_id(BlockId::generate())
        } else {
            block
        };

        let mut blocks = self.blocks.clone();
        match index {
            Some(index) if index <= blocks.len() => blocks.insert(index, block),
            _ => blocks.push(block),
        }
        Self { blocks }
    }

    /// Merge `patch` into the payload of block `id`.
    ///
    /// The merge is shallow: each key in `patch` replaces the block's field of
    /// that name wholesale. The merged object goes back through the kind's
    /// normalizer, so defaults and coercions apply exactly as when parsing.
    /// Keys the kind does not know are kept as extra fields. `id`, `type` and
    /// layout keys in `patch` are ignored.
    ///
    /// No-op when `id` is unknown or the merged payload is malformed.
    pub fn update(&self, id: &BlockId, patch: &Map<String, Value>) -> Self {
        let Some(index) = self.position(id) else {
            log::debug!("Update of unknown block {id} ignored");
            return self.clone();
        };
        let block = &self.blocks[index];

        let mut merged = match block_to_object(block) {
            Ok(object) => object,
            Err(err) => {
                log::warn!("Update of block {id} ignored: {err}");
                return self.clone();
            }
        };
        for (key, value) in patch {
            if key == "id" || key == "type" || LAYOUT_KEYS.contains(&key.as_str()) {
                continue;
            }
            merged.insert(key.clone(), value.clone());
        }

        match normalize_block(id.clone(), block.kind(), &merged) {
            Ok(mut updated) => {
                updated.layout = block.layout.clone();
                self.replace(index, updated)
            }
            Err(err) => {
                log::warn!("Update of block {id} ignored: {err}");
                self.clone()
            }
        }
    }

    /// Replace the payload of block `id` with a typed payload of the same kind,
    /// normalized as if it had been read from storage.
    ///
    /// No-op when `id` is unknown or `payload` is of another kind.
    pub fn set_payload(&self, id: &BlockId, payload: BlockPayload) -> Self {
        let Some(index) = self.position(id) else {
            log::debug!("Payload update of unknown block {id} ignored");
            return self.clone();
        };
        let mut block = self.blocks[index].clone();
        if !block.set_payload(payload) {
            log::debug!("Payload for block {id} rejected");
            return self.clone();
        }
        self.replace(index, block)
    }

    /// Replace the layout settings of block `id`. No-op when `id` is unknown.
    pub fn update_layout(&self, id: &BlockId, layout: LayoutSettings) -> Self {
        let Some(index) = self.position(id) else {
            log::debug!("Layout update of unknown block {id} ignored");
            return self.clone();
        };
        let mut block = self.blocks[index].clone();
        block.layout = layout.normalized();
        self.replace(index, block)
    }

    pub fn remove(&self, id: &BlockId) -> Self {
        let Some(index) = self.position(id) else {
            log::debug!("Removal of unknown block {id} ignored");
            return self.clone();
        };
        let mut blocks = self.blocks.clone();
        blocks.remove(index);
        Self { blocks }
    }

    /// Swap block `id` with its predecessor. No-op for the first block.
    pub fn move_up(&self, id: &BlockId) -> Self {
        match self.position(id) {
            Some(index) if index > 0 => self.swapped(index, index - 1),
            Some(_) => {
                log::debug!("Block {id} is already first");
                self.clone()
            }
            None => {
                log::debug!("Move of unknown block {id} ignored");
                self.clone()
            }
        }
    }

    /// Swap block `id` with its successor. No-op for the last block.
    pub fn move_down(&self, id: &BlockId) -> Self {
        match self.position(id) {
            Some(index) if index + 1 < self.blocks.len() => self.swapped(index, index + 1),
            Some(_) => {
                log::debug!("Block {id} is already last");
                self.clone()
            }
            None => {
                log::debug!("Move of unknown block {id} ignored");
                self.clone()
            }
        }
    }

    /// Move the block at `from` so that it ends up at index `to`.
    ///
    /// `to` is clamped to the last index; an out-of-range `from` is a no-op.
    pub fn move_to(&self, from: usize, to: usize) -> Self {
        if from >= self.blocks.len() {
            log::debug!("Move from index {from} out of range ({} blocks)", self.blocks.len());
            return self.clone();
        }
        let to = to.min(self.blocks.len() - 1);
        if from == to {
            return self.clone();
        }

        let mut blocks = self.blocks.clone();
        let block = blocks.remove(from);
        blocks.insert(to, block);
        Self { blocks }
    }

    /// Insert a copy of block `id` under a fresh id right after it.
    pub fn duplicate(&self, id: &BlockId) -> Self {
        let Some(index) = self.position(id) else {
            log::debug!("Duplicate of unknown block {id} ignored");
            return self.clone();
        };
        let copy = duplicate_block(&self.blocks[index]);
        self.insert(copy, Some(index + 1))
    }

    fn replace(&self, index: usize, block: ContentBlock) -> Self {
        let mut blocks = self.blocks.clone();
        blocks[index] = block;
        Self { blocks }
    }

    fn swapped(&self, a: usize, b: usize) -> Self {
        let mut blocks = self.blocks.clone();
        blocks.swap(a, b);
        Self { blocks }
    }
}

impl<'a> IntoIterator for &'a BlockDocument {
    type Item = &'a ContentBlock;
    type IntoIter = std::slice::Iter<'a, ContentBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::create_block;
    use crate::models::kind::BlockKind;
    use crate::models::layout::Background;
    use crate::io::blocks_to_json;
    use crate::models::payload::{
        Faq, FaqItem, FeatureList, Quote, SimpleTable, Spacer, SpacerSize,
    };
    use crate::models::rich_text::RichText;
    use crate::parsing::parse_blocks;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn block(id: &str, kind: BlockKind) -> ContentBlock {
        create_block(kind).with_id(BlockId::from(id))
    }

    fn abc() -> BlockDocument {
        BlockDocument::from_blocks(vec![
            block("a", BlockKind::Hero),
            block("b", BlockKind::Quote),
            block("c", BlockKind::Divider),
        ])
    }

    fn ids(doc: &BlockDocument) -> Vec<String> {
        doc.iter().map(|b| b.id().to_string()).collect()
    }

    fn patch(value: Value) -> Map<String, Value> {
        let Value::Object(map) = value else {
            panic!("patch must be an object")
        };
        map
    }

    #[rstest]
    #[case(Some(0), vec!["x", "a", "b", "c"])]
    #[case(Some(1), vec!["a", "x", "b", "c"])]
    #[case(Some(3), vec!["a", "b", "c", "x"])]
    #[case(Some(4), vec!["a", "b", "c", "x"])]
    #[case(Some(usize::MAX), vec!["a", "b", "c", "x"])]
    #[case(None, vec!["a", "b", "c", "x"])]
    fn test_insert_position(#[case] index: Option<usize>, #[case] expected: Vec<&str>) {
        let doc = abc().insert(block("x", BlockKind::Spacer), index);
        assert_eq!(ids(&doc), expected);
    }

    #[test]
    fn test_insert_does_not_touch_the_input() {
        let doc = abc();
        let _ = doc.insert(block("x", BlockKind::Spacer), Some(0));
        assert_eq!(ids(&doc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_insert_rekeys_taken_id() {
        let doc = abc().insert(block("b", BlockKind::Spacer), Some(0));
        assert_eq!(doc.len(), 4);
        assert_ne!(doc.blocks()[0].id().as_str(), "b");
        assert_eq!(doc.blocks()[0].kind(), BlockKind::Spacer);
    }

    #[test]
    fn test_update_merges_shallowly_and_keeps_identity() {
        let doc = abc().update(
            &BlockId::from("b"),
            &patch(json!({ "text": "Nytt citat", "id": "hijack", "type": "hero" })),
        );
        let updated = doc.get(&BlockId::from("b")).unwrap();
        assert_eq!(updated.kind(), BlockKind::Quote);
        assert_eq!(
            updated.payload(),
            &BlockPayload::Quote(Quote {
                text: "Nytt citat".to_string(),
                ..Quote::default()
            })
        );
        assert_eq!(ids(&doc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_update_replaces_nested_lists_wholesale() {
        let faq = block("f", BlockKind::Faq);
        let two_items = Faq {
            title: "Frågor".to_string(),
            items: vec![
                FaqItem {
                    question: "Ett".to_string(),
                    answer: RichText::from_plain_text("1"),
                    ..Default::default()
                },
                FaqItem {
                    question: "Två".to_string(),
                    answer: RichText::from_plain_text("2"),
                    ..Default::default()
                },
            ],
        };
        let doc = BlockDocument::from_blocks(vec![faq])
            .set_payload(&BlockId::from("f"), BlockPayload::Faq(two_items));

        let doc = doc.update(
            &BlockId::from("f"),
            &patch(json!({ "items": [{ "question": "Bara en" }] })),
        );
        let BlockPayload::Faq(updated) = doc.get(&BlockId::from("f")).unwrap().payload() else {
            panic!("expected faq");
        };
        assert_eq!(updated.title, "Frågor");
        assert_eq!(updated.items.len(), 1);
        assert_eq!(updated.items[0].question, "Bara en");
        assert_eq!(updated.items[0].answer, RichText::empty());
    }

    #[test]
    fn test_update_migrates_and_keeps_unknown_keys() {
        let doc = abc().update(
            &BlockId::from("a"),
            &patch(json!({ "description": "Vanlig text", "ribbon": "Nyhet" })),
        );
        let hero = doc.get(&BlockId::from("a")).unwrap();
        let BlockPayload::Hero(payload) = hero.payload() else {
            panic!("expected hero");
        };
        assert_eq!(payload.description.plain_text(), "Vanlig text");
        assert_eq!(hero.extra().get("ribbon"), Some(&json!("Nyhet")));
    }

    #[test]
    fn test_update_ignores_layout_keys() {
        let doc = abc().update(&BlockId::from("c"), &patch(json!({ "background": "dark" })));
        assert_eq!(doc, abc());
    }

    #[test]
    fn test_malformed_update_is_a_noop() {
        let doc = abc();
        let updated = doc.update(&BlockId::from("b"), &patch(json!({ "text": ["not", "text"] })));
        assert_eq!(updated, doc);
    }

    #[test]
    fn test_set_payload_rejects_other_kinds() {
        let doc = abc();
        let spacer = BlockPayload::Spacer(Spacer {
            height: SpacerSize::Xl,
        });
        assert_eq!(doc.set_payload(&BlockId::from("b"), spacer.clone()), doc);

        let doc = doc.insert(block("s", BlockKind::Spacer), None);
        let updated = doc.set_payload(&BlockId::from("s"), spacer.clone());
        assert_eq!(updated.get(&BlockId::from("s")).unwrap().payload(), &spacer);
    }

    #[test]
    fn test_set_payload_stores_what_a_reload_would_read() {
        let doc = BlockDocument::from_blocks(vec![
            block("f", BlockKind::FeatureList),
            block("t", BlockKind::SimpleTable),
        ]);
        let doc = doc
            .set_payload(
                &BlockId::from("f"),
                BlockPayload::FeatureList(FeatureList {
                    columns: 0,
                    ..Default::default()
                }),
            )
            .set_payload(
                &BlockId::from("t"),
                BlockPayload::SimpleTable(SimpleTable {
                    headers: vec!["A".to_string()],
                    rows: vec![vec!["1".to_string(), "2".to_string()]],
                    ..Default::default()
                }),
            );

        let reloaded = parse_blocks(&blocks_to_json(&doc).unwrap());
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn test_update_layout() {
        let layout = LayoutSettings {
            background: Background::Primary,
            anchor: Some(String::new()),
            ..Default::default()
        };
        let doc = abc().update_layout(&BlockId::from("c"), layout);
        let c = doc.get(&BlockId::from("c")).unwrap();
        assert_eq!(c.layout.background, Background::Primary);
        assert_eq!(c.layout.anchor, None);
    }

    #[rstest]
    #[case::up_first("up", "a", vec!["a", "b", "c"])]
    #[case::up_middle("up", "b", vec!["b", "a", "c"])]
    #[case::down_middle("down", "b", vec!["a", "c", "b"])]
    #[case::down_last("down", "c", vec!["a", "b", "c"])]
    #[case::up_unknown("up", "zz", vec!["a", "b", "c"])]
    #[case::down_unknown("down", "zz", vec!["a", "b", "c"])]
    fn test_move_up_down(#[case] direction: &str, #[case] id: &str, #[case] expected: Vec<&str>) {
        let id = BlockId::from(id);
        let doc = match direction {
            "up" => abc().move_up(&id),
            _ => abc().move_down(&id),
        };
        assert_eq!(ids(&doc), expected);
    }

    #[rstest]
    #[case(0, 2, vec!["b", "c", "a"])]
    #[case(2, 0, vec!["c", "a", "b"])]
    #[case(0, 99, vec!["b", "c", "a"])]
    #[case(1, 1, vec!["a", "b", "c"])]
    #[case(3, 0, vec!["a", "b", "c"])]
    fn test_move_to(#[case] from: usize, #[case] to: usize, #[case] expected: Vec<&str>) {
        assert_eq!(ids(&abc().move_to(from, to)), expected);
    }

    #[test]
    fn test_move_to_on_empty_document() {
        assert_eq!(BlockDocument::new().move_to(0, 0), BlockDocument::new());
    }

    #[test]
    fn test_duplicate_inserts_after_source() {
        let doc = abc().duplicate(&BlockId::from("b"));
        assert_eq!(doc.len(), 4);
        let copy = &doc.blocks()[2];
        assert_ne!(copy.id().as_str(), "b");
        assert_eq!(copy.payload(), doc.blocks()[1].payload());
        assert_eq!(doc.blocks()[3].id().as_str(), "c");
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let doc = abc();
        let ghost = BlockId::from("ghost");
        assert_eq!(doc.remove(&ghost), doc);
        assert_eq!(doc.duplicate(&ghost), doc);
        assert_eq!(doc.update(&ghost, &patch(json!({ "text": "x" }))), doc);
        assert_eq!(doc.update_layout(&ghost, LayoutSettings::default()), doc);
    }

    #[test]
    fn test_from_blocks_rekeys_duplicates() {
        let doc = BlockDocument::from_blocks(vec![
            block("a", BlockKind::Divider),
            block("a", BlockKind::Spacer),
            block("", BlockKind::Quote),
        ]);
        let ids: HashSet<_> = doc.ids().into_iter().collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(doc.blocks()[0].id().as_str(), "a");
    }
}
