use serde::{Deserialize, Serialize};

use super::conversion::{FormField, default_form_fields};
use crate::models::rich_text::RichText;
use crate::parsing::fields::{FieldError, Fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeroLayout {
    /// Image covers the whole section with text on top.
    #[default]
    #[serde(rename = "full-bg")]
    FullBg,
    #[serde(rename = "split-left")]
    SplitLeft,
    #[serde(rename = "split-right")]
    SplitRight,
    #[serde(rename = "centered")]
    Centered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    #[default]
    Right,
}

pub const DEFAULT_OVERLAY_COLOR: &str = "#000000";
pub const DEFAULT_OVERLAY_OPACITY: u8 = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: RichText,
    pub image: String,
    pub image_alt: String,
    pub layout: HeroLayout,
    pub text_color: TextColor,
    pub primary_cta_text: String,
    pub primary_cta_link: String,
    pub secondary_cta_text: String,
    pub secondary_cta_link: String,
    pub overlay: bool,
    pub overlay_color: String,
    /// Percent, 0..=100.
    pub overlay_opacity: u8,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            description: RichText::empty(),
            image: String::new(),
            image_alt: String::new(),
            layout: HeroLayout::FullBg,
            text_color: TextColor::Light,
            primary_cta_text: String::new(),
            primary_cta_link: String::new(),
            secondary_cta_text: String::new(),
            secondary_cta_link: String::new(),
            overlay: true,
            overlay_color: DEFAULT_OVERLAY_COLOR.to_string(),
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
        }
    }
}

impl Hero {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            subtitle: f.string("subtitle")?,
            description: f.rich_text("description")?,
            image: f.string("image")?,
            image_alt: f.string("imageAlt")?,
            layout: f.enum_or("layout", HeroLayout::default()),
            text_color: f.enum_or("textColor", TextColor::default()),
            primary_cta_text: f.string("primaryCtaText")?,
            primary_cta_link: f.string("primaryCtaLink")?,
            secondary_cta_text: f.string("secondaryCtaText")?,
            secondary_cta_link: f.string("secondaryCtaLink")?,
            overlay: f.bool_or("overlay", true)?,
            overlay_color: f.string_or("overlayColor", DEFAULT_OVERLAY_COLOR)?,
            overlay_opacity: f.integer_in("overlayOpacity", DEFAULT_OVERLAY_OPACITY, 0..=100)?,
        })
    }
}

/// Hero section with a lead form beside the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroWithForm {
    pub title: String,
    pub subtitle: String,
    pub description: RichText,
    pub image: String,
    pub image_alt: String,
    pub text_color: TextColor,
    pub form_title: String,
    pub submit_text: String,
    pub success_message: String,
    pub fields: Vec<FormField>,
}

impl Default for HeroWithForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            description: RichText::empty(),
            image: String::new(),
            image_alt: String::new(),
            text_color: TextColor::Light,
            form_title: String::new(),
            submit_text: super::conversion::DEFAULT_SUBMIT_TEXT.to_string(),
            success_message: super::conversion::DEFAULT_SUCCESS_MESSAGE.to_string(),
            fields: default_form_fields(),
        }
    }
}

impl HeroWithForm {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            subtitle: f.string("subtitle")?,
            description: f.rich_text("description")?,
            image: f.string("image")?,
            image_alt: f.string("imageAlt")?,
            text_color: f.enum_or("textColor", TextColor::default()),
            form_title: f.string("formTitle")?,
            submit_text: f.string_or("submitText", super::conversion::DEFAULT_SUBMIT_TEXT)?,
            success_message: f
                .string_or("successMessage", super::conversion::DEFAULT_SUCCESS_MESSAGE)?,
            fields: f.items("fields", FormField::normalize)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextImage {
    pub title: String,
    pub content: RichText,
    pub image: String,
    pub image_alt: String,
    pub image_position: ImagePosition,
    pub cta_text: String,
    pub cta_link: String,
}

impl Default for TextImage {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: RichText::empty(),
            image: String::new(),
            image_alt: String::new(),
            image_position: ImagePosition::Right,
            cta_text: String::new(),
            cta_link: String::new(),
        }
    }
}

impl TextImage {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            content: f.rich_text("content")?,
            image: f.string("image")?,
            image_alt: f.string("imageAlt")?,
            image_position: f.enum_or("imagePosition", ImagePosition::default()),
            cta_text: f.string("ctaText")?,
            cta_link: f.string("ctaLink")?,
        })
    }
}
