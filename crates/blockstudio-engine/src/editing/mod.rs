/*!
 * # Editing
 *
 * The authoring state is a [`BlockDocument`]: an ordered list of blocks with
 * unique ids. The editing surface never mutates a document in place. Every
 * user action becomes a method call (or an [`EditCommand`]) that returns the
 * next document, leaving the previous one intact.
 *
 * ## Totality
 *
 * The surface is user-driven and can race against itself (a click on a block
 * that another action just removed, a drag that outlives its target). None
 * of the operations fail for that:
 *
 * - an unknown id makes the operation a no-op
 * - out-of-range insert positions append, out-of-range move targets clamp
 * - boundary moves (first block up, last block down) are no-ops
 *
 * No-ops are logged at debug level.
 *
 * ## Module Structure
 *
 * - **`document`**: `BlockDocument` and its pure mutation/query methods
 * - **`commands`**: `EditCommand` enum dispatched through `BlockDocument::apply`
 * - **`drag`**: `DragSession` begin/drop/cancel for drag-to-reorder
 *
 * ```rust
 * use blockstudio_engine::editing::{BlockDocument, EditCommand};
 * use blockstudio_engine::{BlockKind, create_block};
 *
 * let hero = create_block(BlockKind::Hero);
 * let id = hero.id().clone();
 *
 * let doc = BlockDocument::new().apply(&EditCommand::Insert { block: hero, index: None });
 * let doc = doc.duplicate(&id);
 * assert_eq!(doc.len(), 2);
 * ```
 */

pub mod commands;
pub mod document;
pub mod drag;

pub use commands::EditCommand;
pub use document::BlockDocument;
pub use drag::{DragSession, DropTarget};
