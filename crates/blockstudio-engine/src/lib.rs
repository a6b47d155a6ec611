pub mod editing;
pub mod factory;
pub mod io;
pub mod models;
pub mod parsing;
pub mod policy;
pub mod registry;

// Re-export key types for easier usage
pub use editing::{BlockDocument, DragSession, DropTarget, EditCommand};
pub use factory::{create_block, duplicate_block};
pub use io::{SerializeError, blocks_to_json, blocks_to_string};
pub use models::{
    Background, BlockId, BlockKind, BlockPayload, ContentBlock, LayoutSettings, MaxWidth, Padding,
    RichText, UnknownKind,
};
pub use parsing::{
    Diagnostic, DiagnosticKind, ParseReport, parse_blocks, parse_blocks_str, parse_blocks_with_report,
};
pub use policy::KindPolicy;
pub use registry::{BlockCategory, BlockDefinition, get_block_definition, registry};
