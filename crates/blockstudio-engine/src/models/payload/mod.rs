//! Kind-specific block payloads.
//!
//! Every kind has one payload struct that knows how to read itself from a
//! persisted object (`normalize`, defaulting and migrating as it goes) and
//! writes itself back through `serde`. [`BlockPayload`] is the tagged union over
//! all of them; its variant always agrees with the block's [`BlockKind`].

pub mod cards;
pub mod collections;
pub mod conversion;
pub mod data;
pub mod hero;
pub mod media;
pub mod text;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::kind::BlockKind;
use crate::parsing::fields::{FieldError, Fields};

pub use cards::*;
pub use collections::*;
pub use conversion::*;
pub use data::*;
pub use hero::*;
pub use media::*;
pub use text::*;

/// Keys of a list item that no normalizer reads, written back untouched.
///
/// Only normalization fills it, from the keys the item's own fields did not
/// consume, so it never shadows a known field when flattened back out.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct UnknownFields(Map<String, Value>);

impl UnknownFields {
    /// Whatever `fields` has not consumed yet. Call after every known key is read.
    pub(crate) fn remaining(fields: &Fields<'_>) -> Self {
        Self(fields.unconsumed(&[]))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

macro_rules! block_payloads {
    ($($variant:ident($payload:ty)),* $(,)?) => {
        /// Payload of a block, one variant per [`BlockKind`].
        #[derive(Debug, Clone, PartialEq)]
        pub enum BlockPayload {
            $($variant($payload),)*
        }

        impl BlockPayload {
            pub fn kind(&self) -> BlockKind {
                match self {
                    $(BlockPayload::$variant(_) => BlockKind::$variant,)*
                }
            }

            /// The payload a freshly created block of `kind` starts with.
            pub fn default_for(kind: BlockKind) -> Self {
                match kind {
                    $(BlockKind::$variant => BlockPayload::$variant(<$payload>::default()),)*
                }
            }

            /// Read the payload for `kind` from a persisted block object.
            pub(crate) fn normalize(kind: BlockKind, fields: &mut Fields<'_>) -> Result<Self, FieldError> {
                match kind {
                    $(BlockKind::$variant => <$payload>::normalize(fields).map(BlockPayload::$variant),)*
                }
            }

            /// The payload's persisted fields.
            pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
                let value = match self {
                    $(BlockPayload::$variant(payload) => serde_json::to_value(payload)?,)*
                };
                match value {
                    Value::Object(map) => Ok(map),
                    other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                        "{} payload serialized to {other} instead of an object",
                        self.kind()
                    ))),
                }
            }
        }
    };
}

block_payloads! {
    Hero(Hero),
    HeroWithForm(HeroWithForm),
    RichText(RichTextBlock),
    TextImage(TextImage),
    SingleImage(SingleImage),
    Quote(Quote),
    FeatureList(FeatureList),
    FeatureCards(FeatureCards),
    ServiceCards(ServiceCards),
    ProductCards(ProductCards),
    Faq(Faq),
    Accordion(Accordion),
    Tabs(Tabs),
    Timeline(Timeline),
    Cta(Cta),
    CtaWithImage(CtaWithImage),
    InlineCta(InlineCta),
    ContactForm(ContactForm),
    Testimonials(Testimonials),
    TestimonialSingle(TestimonialSingle),
    Stats(Stats),
    LogoGrid(LogoGrid),
    TeamGrid(TeamGrid),
    VideoEmbed(VideoEmbed),
    ImageGallery(ImageGallery),
    Map(MapEmbed),
    SimpleTable(SimpleTable),
    Comparison(Comparison),
    HtmlEmbed(HtmlEmbed),
    Spacer(Spacer),
    Divider(Divider),
}
