use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminant selecting a block's payload shape.
///
/// The serialized form is the persisted `type` tag, e.g. `"heroWithForm"`.
/// Declaration order is the order blocks are offered in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockKind {
    #[serde(rename = "hero")]
    Hero,
    #[serde(rename = "heroWithForm")]
    HeroWithForm,
    #[serde(rename = "richText")]
    RichText,
    #[serde(rename = "textImage")]
    TextImage,
    #[serde(rename = "singleImage")]
    SingleImage,
    #[serde(rename = "quote")]
    Quote,
    #[serde(rename = "featureList")]
    FeatureList,
    #[serde(rename = "featureCards")]
    FeatureCards,
    #[serde(rename = "serviceCards")]
    ServiceCards,
    #[serde(rename = "productCards")]
    ProductCards,
    #[serde(rename = "faq")]
    Faq,
    #[serde(rename = "accordion")]
    Accordion,
    #[serde(rename = "tabs")]
    Tabs,
    #[serde(rename = "timeline")]
    Timeline,
    #[serde(rename = "cta")]
    Cta,
    #[serde(rename = "ctaWithImage")]
    CtaWithImage,
    #[serde(rename = "inlineCTA")]
    InlineCta,
    #[serde(rename = "contactForm")]
    ContactForm,
    #[serde(rename = "testimonials")]
    Testimonials,
    #[serde(rename = "testimonialSingle")]
    TestimonialSingle,
    #[serde(rename = "stats")]
    Stats,
    #[serde(rename = "logoGrid")]
    LogoGrid,
    #[serde(rename = "teamGrid")]
    TeamGrid,
    #[serde(rename = "videoEmbed")]
    VideoEmbed,
    #[serde(rename = "imageGallery")]
    ImageGallery,
    #[serde(rename = "map")]
    Map,
    #[serde(rename = "simpleTable")]
    SimpleTable,
    #[serde(rename = "comparison")]
    Comparison,
    #[serde(rename = "htmlEmbed")]
    HtmlEmbed,
    #[serde(rename = "spacer")]
    Spacer,
    #[serde(rename = "divider")]
    Divider,
}

impl BlockKind {
    pub const ALL: [BlockKind; 31] = [
        BlockKind::Hero,
        BlockKind::HeroWithForm,
        BlockKind::RichText,
        BlockKind::TextImage,
        BlockKind::SingleImage,
        BlockKind::Quote,
        BlockKind::FeatureList,
        BlockKind::FeatureCards,
        BlockKind::ServiceCards,
        BlockKind::ProductCards,
        BlockKind::Faq,
        BlockKind::Accordion,
        BlockKind::Tabs,
        BlockKind::Timeline,
        BlockKind::Cta,
        BlockKind::CtaWithImage,
        BlockKind::InlineCta,
        BlockKind::ContactForm,
        BlockKind::Testimonials,
        BlockKind::TestimonialSingle,
        BlockKind::Stats,
        BlockKind::LogoGrid,
        BlockKind::TeamGrid,
        BlockKind::VideoEmbed,
        BlockKind::ImageGallery,
        BlockKind::Map,
        BlockKind::SimpleTable,
        BlockKind::Comparison,
        BlockKind::HtmlEmbed,
        BlockKind::Spacer,
        BlockKind::Divider,
    ];

    /// The persisted `type` tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::HeroWithForm => "heroWithForm",
            BlockKind::RichText => "richText",
            BlockKind::TextImage => "textImage",
            BlockKind::SingleImage => "singleImage",
            BlockKind::Quote => "quote",
            BlockKind::FeatureList => "featureList",
            BlockKind::FeatureCards => "featureCards",
            BlockKind::ServiceCards => "serviceCards",
            BlockKind::ProductCards => "productCards",
            BlockKind::Faq => "faq",
            BlockKind::Accordion => "accordion",
            BlockKind::Tabs => "tabs",
            BlockKind::Timeline => "timeline",
            BlockKind::Cta => "cta",
            BlockKind::CtaWithImage => "ctaWithImage",
            BlockKind::InlineCta => "inlineCTA",
            BlockKind::ContactForm => "contactForm",
            BlockKind::Testimonials => "testimonials",
            BlockKind::TestimonialSingle => "testimonialSingle",
            BlockKind::Stats => "stats",
            BlockKind::LogoGrid => "logoGrid",
            BlockKind::TeamGrid => "teamGrid",
            BlockKind::VideoEmbed => "videoEmbed",
            BlockKind::ImageGallery => "imageGallery",
            BlockKind::Map => "map",
            BlockKind::SimpleTable => "simpleTable",
            BlockKind::Comparison => "comparison",
            BlockKind::HtmlEmbed => "htmlEmbed",
            BlockKind::Spacer => "spacer",
            BlockKind::Divider => "divider",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a `type` tag does not name any known block kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown block kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for BlockKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
