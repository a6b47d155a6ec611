use serde_json::{Map, Value};

use crate::editing::document::BlockDocument;
use crate::models::block::{BlockId, ContentBlock};
use crate::models::layout::LayoutSettings;
use crate::models::payload::BlockPayload;

/// A single user-driven edit, as dispatched by the editing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    Insert {
        block: ContentBlock,
        /// Append when absent or past the end.
        index: Option<usize>,
    },
    Update {
        id: BlockId,
        patch: Map<String, Value>,
    },
    SetPayload {
        id: BlockId,
        payload: BlockPayload,
    },
    UpdateLayout {
        id: BlockId,
        layout: LayoutSettings,
    },
    Remove {
        id: BlockId,
    },
    MoveUp {
        id: BlockId,
    },
    MoveDown {
        id: BlockId,
    },
    MoveTo {
        from: usize,
        to: usize,
    },
    Duplicate {
        id: BlockId,
    },
}

impl BlockDocument {
    /// Apply `command`, returning the edited document.
    pub fn apply(&self, command: &EditCommand) -> BlockDocument {
        match command {
            EditCommand::Insert { block, index } => self.insert(block.clone(), *index),
            EditCommand::Update { id, patch } => self.update(id, patch),
            EditCommand::SetPayload { id, payload } => self.set_payload(id, payload.clone()),
            EditCommand::UpdateLayout { id, layout } => self.update_layout(id, layout.clone()),
            EditCommand::Remove { id } => self.remove(id),
            EditCommand::MoveUp { id } => self.move_up(id),
            EditCommand::MoveDown { id } => self.move_down(id),
            EditCommand::MoveTo { from, to } => self.move_to(*from, *to),
            EditCommand::Duplicate { id } => self.duplicate(id),
        }
    }

    /// Apply `commands` in order.
    pub fn apply_all<'a>(&self, commands: impl IntoIterator<Item = &'a EditCommand>) -> BlockDocument {
        commands
            .into_iter()
            .fold(self.clone(), |doc, command| doc.apply(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::create_block;
    use crate::models::kind::BlockKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_sequence() {
        let hero = create_block(BlockKind::Hero);
        let faq = create_block(BlockKind::Faq);
        let hero_id = hero.id().clone();
        let faq_id = faq.id().clone();

        let doc = BlockDocument::new().apply_all(&[
            EditCommand::Insert {
                block: hero,
                index: None,
            },
            EditCommand::Insert {
                block: faq,
                index: Some(0),
            },
            EditCommand::MoveDown { id: faq_id.clone() },
            EditCommand::Duplicate { id: hero_id.clone() },
        ]);

        let kinds: Vec<_> = doc.iter().map(ContentBlock::kind).collect();
        assert_eq!(kinds, vec![BlockKind::Hero, BlockKind::Hero, BlockKind::Faq]);
        assert_eq!(doc.blocks()[0].id(), &hero_id);
        assert_eq!(doc.blocks()[2].id(), &faq_id);
    }

    #[test]
    fn test_removing_everything_leaves_a_valid_empty_document() {
        let blocks: Vec<_> = [BlockKind::Hero, BlockKind::Quote, BlockKind::Divider]
            .into_iter()
            .map(create_block)
            .collect();
        let removals: Vec<_> = blocks
            .iter()
            .map(|b| EditCommand::Remove { id: b.id().clone() })
            .collect();

        let doc = BlockDocument::from_blocks(blocks).apply_all(&removals);
        assert!(doc.is_empty());
        assert_eq!(doc, BlockDocument::new());
    }
}
