//! Which block kinds an authoring context offers for insertion.
//!
//! A policy only narrows the block picker. Parsing and editing accept every
//! recognized kind regardless of policy, so tightening a context after content
//! exists never strips blocks; [`KindPolicy::out_of_policy`] lets a surface
//! flag them instead.

use std::collections::BTreeSet;

use crate::editing::document::BlockDocument;
use crate::factory::create_block;
use crate::models::block::{BlockId, ContentBlock};
use crate::models::kind::BlockKind;
use crate::registry::{BlockDefinition, registry};

/// Kinds offered in blog posts.
pub const BLOG_POST_KINDS: [BlockKind; 8] = [
    BlockKind::RichText,
    BlockKind::SingleImage,
    BlockKind::VideoEmbed,
    BlockKind::Divider,
    BlockKind::Tabs,
    BlockKind::SimpleTable,
    BlockKind::InlineCta,
    BlockKind::Quote,
];

/// Optional allow-list of insertable kinds. `None` allows everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KindPolicy {
    allowed: Option<BTreeSet<BlockKind>>,
}

impl KindPolicy {
    pub fn unrestricted() -> Self {
        Self { allowed: None }
    }

    pub fn allow(kinds: impl IntoIterator<Item = BlockKind>) -> Self {
        Self {
            allowed: Some(kinds.into_iter().collect()),
        }
    }

    pub fn blog_post() -> Self {
        Self::allow(BLOG_POST_KINDS)
    }

    pub fn is_restricted(&self) -> bool {
        self.allowed.is_some()
    }

    pub fn allows(&self, kind: BlockKind) -> bool {
        self.allowed
            .as_ref()
            .is_none_or(|allowed| allowed.contains(&kind))
    }

    /// Definitions the picker offers, in picker order.
    pub fn insertable(&self) -> Vec<&'static BlockDefinition> {
        registry().iter().filter(|def| self.allows(def.kind)).collect()
    }

    /// A new block of `kind`, or `None` if this context does not offer it.
    pub fn create_block(&self, kind: BlockKind) -> Option<ContentBlock> {
        if !self.allows(kind) {
            log::debug!("Block kind {kind} not offered by the active policy");
            return None;
        }
        Some(create_block(kind))
    }

    /// Ids of existing blocks whose kind this policy would not offer.
    ///
    /// Such blocks stay fully editable.
    pub fn out_of_policy(&self, document: &BlockDocument) -> Vec<BlockId> {
        document
            .iter()
            .filter(|block| !self.allows(block.kind()))
            .map(|block| block.id().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(BlockKind::RichText, true)]
    #[case(BlockKind::InlineCta, true)]
    #[case(BlockKind::Quote, true)]
    #[case(BlockKind::Hero, false)]
    #[case(BlockKind::ContactForm, false)]
    fn test_blog_post_policy(#[case] kind: BlockKind, #[case] allowed: bool) {
        let policy = KindPolicy::blog_post();
        assert_eq!(policy.allows(kind), allowed);
        assert_eq!(policy.create_block(kind).is_some(), allowed);
    }

    #[test]
    fn test_unrestricted_offers_everything() {
        let policy = KindPolicy::unrestricted();
        assert!(!policy.is_restricted());
        assert_eq!(policy.insertable().len(), BlockKind::ALL.len());
    }

    #[test]
    fn test_insertable_keeps_picker_order() {
        let kinds: Vec<_> = KindPolicy::allow([BlockKind::Divider, BlockKind::RichText, BlockKind::Quote])
            .insertable()
            .into_iter()
            .map(|def| def.kind)
            .collect();
        assert_eq!(kinds, vec![BlockKind::RichText, BlockKind::Quote, BlockKind::Divider]);
    }

    #[test]
    fn test_existing_blocks_outside_policy_are_flagged_not_removed() {
        let hero = create_block(BlockKind::Hero);
        let hero_id = hero.id().clone();
        let doc = BlockDocument::from_blocks(vec![create_block(BlockKind::RichText), hero]);

        let policy = KindPolicy::blog_post();
        assert_eq!(policy.out_of_policy(&doc), vec![hero_id.clone()]);
        assert_eq!(doc.len(), 2);
        assert!(doc.get(&hero_id).is_some());
    }
}
