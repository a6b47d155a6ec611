pub mod block;
pub mod kind;
pub mod layout;
pub mod payload;
pub mod rich_text;

pub use block::{BlockId, ContentBlock};
pub use kind::{BlockKind, UnknownKind};
pub use layout::{Background, LayoutSettings, MaxWidth, Padding};
pub use payload::BlockPayload;
pub use rich_text::RichText;
