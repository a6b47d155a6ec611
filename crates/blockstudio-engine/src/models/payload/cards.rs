//! Grid-type blocks: repeated cards laid out in columns.

use serde::Serialize;

use crate::models::payload::UnknownFields;
use crate::models::rich_text::RichText;
use crate::parsing::fields::{FieldError, Fields};

pub const DEFAULT_COLUMNS: u8 = 3;
pub const MAX_COLUMNS: u8 = 6;

fn columns(f: &mut Fields<'_>) -> Result<u8, FieldError> {
    f.integer_in("columns", DEFAULT_COLUMNS, 1..=MAX_COLUMNS)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: String,
    pub description: RichText,
    /// Icon name from the site's icon set.
    pub icon: String,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl FeatureItem {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            description: f.rich_text("description")?,
            icon: f.string("icon")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureList {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<FeatureItem>,
    pub columns: u8,
}

impl Default for FeatureList {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            items: Vec::new(),
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl FeatureList {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            subtitle: f.string("subtitle")?,
            items: f.items("items", FeatureItem::normalize)?,
            columns: columns(f)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCard {
    pub title: String,
    pub description: RichText,
    pub icon: String,
    pub image: String,
    pub link: String,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl FeatureCard {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            description: f.rich_text("description")?,
            icon: f.string("icon")?,
            image: f.string("image")?,
            link: f.string("link")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCards {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<FeatureCard>,
    pub columns: u8,
}

impl Default for FeatureCards {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            cards: Vec::new(),
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl FeatureCards {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            subtitle: f.string("subtitle")?,
            cards: f.items("cards", FeatureCard::normalize)?,
            columns: columns(f)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCard {
    pub title: String,
    pub description: RichText,
    pub icon: String,
    pub link: String,
    pub link_text: String,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl ServiceCard {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            description: f.rich_text("description")?,
            icon: f.string("icon")?,
            link: f.string("link")?,
            link_text: f.string("linkText")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCards {
    pub title: String,
    pub subtitle: String,
    pub services: Vec<ServiceCard>,
    pub columns: u8,
}

impl Default for ServiceCards {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            services: Vec::new(),
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl ServiceCards {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            subtitle: f.string("subtitle")?,
            services: f.items("services", ServiceCard::normalize)?,
            columns: columns(f)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub name: String,
    pub description: RichText,
    pub image: String,
    /// Display price, formatted by the editor (e.g. "från 499 kr/mån").
    pub price: String,
    pub link: String,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl ProductCard {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            name: f.string("name")?,
            description: f.rich_text("description")?,
            image: f.string("image")?,
            price: f.string("price")?,
            link: f.string("link")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCards {
    pub title: String,
    pub subtitle: String,
    pub products: Vec<ProductCard>,
    pub columns: u8,
}

impl Default for ProductCards {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            products: Vec::new(),
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl ProductCards {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            subtitle: f.string("subtitle")?,
            products: f.items("products", ProductCard::normalize)?,
            columns: columns(f)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItem {
    /// Displayed figure, kept as text so "98 %" or "24/7" survive untouched.
    pub value: String,
    pub label: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl StatItem {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            value: f.string("value")?,
            label: f.string("label")?,
            description: f.string("description")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub title: String,
    pub items: Vec<StatItem>,
    pub columns: u8,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            title: String::new(),
            items: Vec::new(),
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl Stats {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            items: f.items("items", StatItem::normalize)?,
            columns: columns(f)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub image: String,
    pub alt: String,
    pub link: String,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl Logo {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            image: f.string("image")?,
            alt: f.string("alt")?,
            link: f.string("link")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoGrid {
    pub title: String,
    pub logos: Vec<Logo>,
    pub columns: u8,
    pub grayscale: bool,
}

impl Default for LogoGrid {
    fn default() -> Self {
        Self {
            title: String::new(),
            logos: Vec::new(),
            columns: DEFAULT_COLUMNS,
            grayscale: true,
        }
    }
}

impl LogoGrid {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            logos: f.items("logos", Logo::normalize)?,
            columns: columns(f)?,
            grayscale: f.bool_or("grayscale", true)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: RichText,
    pub email: String,
    pub linkedin: String,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl TeamMember {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            name: f.string("name")?,
            role: f.string("role")?,
            image: f.string("image")?,
            bio: f.rich_text("bio")?,
            email: f.string("email")?,
            linkedin: f.string("linkedin")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamGrid {
    pub title: String,
    pub subtitle: String,
    pub members: Vec<TeamMember>,
    pub columns: u8,
}

impl Default for TeamGrid {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            members: Vec::new(),
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl TeamGrid {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            subtitle: f.string("subtitle")?,
            members: f.items("members", TeamMember::normalize)?,
            columns: columns(f)?,
        })
    }
}
