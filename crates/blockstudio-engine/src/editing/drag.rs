//! Drag-to-reorder gesture.
//!
//! A drag has a begin/end lifecycle driven by the user. Nothing is changed
//! until the drop; a drop on an invalid target, or a cancelled gesture,
//! leaves the document as it was.

use crate::editing::document::BlockDocument;
use crate::models::block::BlockId;

/// Where the dragged block was released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Before(BlockId),
    After(BlockId),
    /// Past the last block.
    End,
    /// Outside the list.
    Outside,
}

/// An in-progress drag of one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    dragged: BlockId,
}

impl DragSession {
    /// Start dragging block `id`. `None` if the document has no such block.
    pub fn begin(document: &BlockDocument, id: &BlockId) -> Option<Self> {
        document.position(id).map(|_| Self {
            dragged: id.clone(),
        })
    }

    pub fn dragged(&self) -> &BlockId {
        &self.dragged
    }

    /// Release the block over `target`, returning the reordered document.
    ///
    /// Positions are resolved against `document` as it is now, so a drag that
    /// outlived its block or its target degrades to a no-op.
    pub fn drop_on(self, document: &BlockDocument, target: DropTarget) -> BlockDocument {
        match self.destination(document, &target) {
            Some((from, to)) => document.move_to(from, to),
            None => {
                log::debug!("Drop of block {} on {target:?} cancelled", self.dragged);
                document.clone()
            }
        }
    }

    /// Abandon the gesture.
    pub fn cancel(self) {
        log::debug!("Drag of block {} cancelled", self.dragged);
    }

    /// `(from, to)` indices for the move, or `None` when the drop is invalid
    /// or would not move anything.
    fn destination(&self, document: &BlockDocument, target: &DropTarget) -> Option<(usize, usize)> {
        let from = document.position(&self.dragged)?;
        let gap = match target {
            DropTarget::Outside => return None,
            DropTarget::End => document.len(),
            DropTarget::Before(id) | DropTarget::After(id) if id == &self.dragged => return None,
            DropTarget::Before(id) => document.position(id)?,
            DropTarget::After(id) => document.position(id)? + 1,
        };

        // Removing the dragged block first shifts every later gap down by one
        let mut to = if gap > from { gap - 1 } else { gap };
        to = to.min(document.len().saturating_sub(1));
        (to != from).then_some((from, to))
    }
}
