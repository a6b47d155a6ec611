//! Static catalog of every block kind the editor can insert and render.
//!
//! The registry is built once on first use and never mutated afterwards.
//! Lookups never fail loudly: an absent definition means "unrenderable" and
//! it is up to the caller to skip or placeholder the block.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::models::kind::BlockKind;
use crate::models::payload::BlockPayload;

/// Grouping used by the block picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockCategory {
    Layout,
    Text,
    Media,
    Conversion,
    SocialProof,
    Data,
}

impl BlockCategory {
    pub const ALL: [BlockCategory; 6] = [
        BlockCategory::Layout,
        BlockCategory::Text,
        BlockCategory::Media,
        BlockCategory::Conversion,
        BlockCategory::SocialProof,
        BlockCategory::Data,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BlockCategory::Layout => "Layout",
            BlockCategory::Text => "Text",
            BlockCategory::Media => "Media",
            BlockCategory::Conversion => "Konvertering",
            BlockCategory::SocialProof => "Socialt bevis",
            BlockCategory::Data => "Listor & data",
        }
    }
}

impl fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Registry entry describing one block kind. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDefinition {
    pub kind: BlockKind,
    pub label: &'static str,
    pub category: BlockCategory,
    /// Icon name from the admin icon set.
    pub icon: &'static str,
    pub description: &'static str,
}

impl BlockDefinition {
    /// A fresh default payload for this kind.
    pub fn default_payload(&self) -> BlockPayload {
        BlockPayload::default_for(self.kind)
    }
}

pub struct BlockRegistry {
    definitions: BTreeMap<BlockKind, BlockDefinition>,
}

impl BlockRegistry {
    fn build() -> Self {
        let definitions = BlockKind::ALL
            .into_iter()
            .map(|kind| (kind, describe(kind)))
            .collect();
        Self { definitions }
    }

    pub fn get(&self, kind: BlockKind) -> Option<&BlockDefinition> {
        self.definitions.get(&kind)
    }

    /// Look up a persisted `type` tag. Unknown tags yield `None`.
    pub fn get_by_type(&self, type_name: &str) -> Option<&BlockDefinition> {
        type_name
            .parse::<BlockKind>()
            .ok()
            .and_then(|kind| self.get(kind))
    }

    /// Every definition, in picker order.
    pub fn iter(&self) -> impl Iterator<Item = &BlockDefinition> + '_ {
        BlockKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind))
    }

    pub fn by_category(&self, category: BlockCategory) -> impl Iterator<Item = &BlockDefinition> + '_ {
        self.iter().filter(move |def| def.category == category)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// The process-wide registry.
pub fn registry() -> &'static BlockRegistry {
    static REGISTRY: OnceLock<BlockRegistry> = OnceLock::new();
    REGISTRY.get_or_init(BlockRegistry::build)
}

pub fn get_block_definition(kind: BlockKind) -> Option<&'static BlockDefinition> {
    registry().get(kind)
}

fn describe(kind: BlockKind) -> BlockDefinition {
    use BlockCategory::*;

    let (label, category, icon, description) = match kind {
        BlockKind::Hero => ("Hero", Layout, "layout-template", "Stor toppsektion med bild och knappar"),
        BlockKind::HeroWithForm => (
            "Hero med formulär",
            Conversion,
            "clipboard-list",
            "Toppsektion med ett kontaktformulär bredvid texten",
        ),
        BlockKind::RichText => ("Text", Text, "type", "Fritt formaterad text"),
        BlockKind::TextImage => ("Text och bild", Text, "layout-panel-left", "Text bredvid en bild"),
        BlockKind::SingleImage => ("Bild", Media, "image", "En enskild bild med bildtext"),
        BlockKind::Quote => ("Citat", Text, "quote", "Framhävt citat med avsändare"),
        BlockKind::FeatureList => ("Funktionslista", Data, "list-checks", "Lista med funktioner i kolumner"),
        BlockKind::FeatureCards => ("Funktionskort", Data, "layout-grid", "Kort med ikon, bild och länk"),
        BlockKind::ServiceCards => ("Tjänstekort", Data, "briefcase", "Presentation av tjänster"),
        BlockKind::ProductCards => ("Produktkort", Data, "shopping-bag", "Produkter med pris och länk"),
        BlockKind::Faq => ("Vanliga frågor", Text, "circle-help", "Frågor och svar"),
        BlockKind::Accordion => ("Dragspel", Text, "chevrons-up-down", "Hopfällbara sektioner"),
        BlockKind::Tabs => ("Flikar", Text, "panels-top-left", "Innehåll uppdelat i flikar"),
        BlockKind::Timeline => ("Tidslinje", Text, "milestone", "Händelser i kronologisk ordning"),
        BlockKind::Cta => ("Uppmaning", Conversion, "megaphone", "Uppmaning till handling med knappar"),
        BlockKind::CtaWithImage => (
            "Uppmaning med bild",
            Conversion,
            "image-play",
            "Uppmaning till handling bredvid en bild",
        ),
        BlockKind::InlineCta => ("Inline-uppmaning", Conversion, "mouse-pointer-click", "Kompakt uppmaning i löptext"),
        BlockKind::ContactForm => ("Kontaktformulär", Conversion, "mail", "Formulär som skickas via e-post"),
        BlockKind::Testimonials => ("Omdömen", SocialProof, "messages-square", "Flera kundomdömen"),
        BlockKind::TestimonialSingle => ("Omdöme", SocialProof, "message-square-quote", "Ett framhävt kundomdöme"),
        BlockKind::Stats => ("Statistik", SocialProof, "chart-column", "Nyckeltal i siffror"),
        BlockKind::LogoGrid => ("Logotyper", SocialProof, "award", "Kund- eller partnerlogotyper"),
        BlockKind::TeamGrid => ("Team", SocialProof, "users", "Medarbetare med bild och roll"),
        BlockKind::VideoEmbed => ("Video", Media, "video", "Inbäddad YouTube- eller Vimeo-video"),
        BlockKind::ImageGallery => ("Bildgalleri", Media, "images", "Rutnät eller murverk av bilder"),
        BlockKind::Map => ("Karta", Media, "map-pin", "Karta över en adress"),
        BlockKind::SimpleTable => ("Tabell", Data, "table", "Enkel tabell med rubrikrad"),
        BlockKind::Comparison => ("Jämförelse", Data, "columns-3", "Jämför funktioner mellan paket"),
        BlockKind::HtmlEmbed => ("HTML", Media, "code", "Egen HTML-kod"),
        BlockKind::Spacer => ("Mellanrum", Layout, "move-vertical", "Tomt vertikalt utrymme"),
        BlockKind::Divider => ("Avdelare", Layout, "minus", "Horisontell avdelare"),
    };

    BlockDefinition {
        kind,
        label,
        category,
        icon,
        description,
    }
}
