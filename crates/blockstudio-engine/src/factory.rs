use crate::models::block::{BlockId, ContentBlock};
use crate::models::kind::BlockKind;
use crate::models::payload::BlockPayload;

/// A new block of `kind` with a fresh id, the kind's default payload and
/// default layout settings.
pub fn create_block(kind: BlockKind) -> ContentBlock {
    ContentBlock::new(BlockId::generate(), BlockPayload::default_for(kind))
}

/// A copy of `block` under a fresh id.
///
/// Payloads own all of their data, so the copy shares nothing with the
/// source and editing one never shows up in the other.
pub fn duplicate_block(block: &ContentBlock) -> ContentBlock {
    block.clone().with_id(BlockId::generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payload::{Faq, FaqItem, Hero, HeroLayout, SimpleTable, TextColor};
    use crate::models::rich_text::RichText;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_created_hero_has_documented_defaults() {
        let block = create_block(BlockKind::Hero);
        let BlockPayload::Hero(hero) = block.payload() else {
            panic!("expected hero payload");
        };
        assert_eq!(hero.layout, HeroLayout::FullBg);
        assert_eq!(hero.text_color, TextColor::Light);
        assert!(hero.description.is_empty());
        assert_eq!(hero, &Hero::default());
    }

    #[test]
    fn test_created_table_is_one_by_two() {
        let block = create_block(BlockKind::SimpleTable);
        let BlockPayload::SimpleTable(table) = block.payload() else {
            panic!("expected table payload");
        };
        assert_eq!(table, &SimpleTable::default());
        assert_eq!(table.headers, vec!["Kolumn 1", "Kolumn 2"]);
        assert_eq!(table.rows, vec![vec![String::new(), String::new()]]);
    }

    #[test]
    fn test_created_ids_are_fresh() {
        let a = create_block(BlockKind::Divider);
        let b = create_block(BlockKind::Divider);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.payload(), b.payload());
    }

    #[test]
    fn test_duplicate_is_deep_copy_with_new_id() {
        let mut original = create_block(BlockKind::Faq);
        original.set_payload(BlockPayload::Faq(Faq {
            title: "Frågor".to_string(),
            items: vec![FaqItem {
                question: "Hur?".to_string(),
                answer: RichText::from_plain_text("Så här."),
                ..Default::default()
            }],
        }));

        let mut copy = duplicate_block(&original);
        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.payload(), original.payload());
        assert_eq!(copy.layout, original.layout);

        let BlockPayload::Faq(mut faq) = copy.payload().clone() else {
            panic!("expected faq payload");
        };
        faq.items[0].question = "Varför?".to_string();
        copy.set_payload(BlockPayload::Faq(faq));

        let BlockPayload::Faq(source) = original.payload() else {
            panic!("expected faq payload");
        };
        assert_eq!(source.items[0].question, "Hur?");
    }
}
