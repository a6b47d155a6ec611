use serde::{Deserialize, Serialize};

use crate::models::rich_text::RichText;
use crate::parsing::fields::{FieldError, Fields};

/// Free-form formatted text.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextBlock {
    pub content: RichText,
}

impl RichTextBlock {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            content: f.rich_text("content")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub role: String,
    /// Optional portrait; empty when unset.
    pub image: String,
}

impl Quote {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            text: f.string("text")?,
            author: f.string("author")?,
            role: f.string("role")?,
            image: f.string("image")?,
        })
    }
}

/// Raw HTML pasted by an editor. Rendered as-is by the site.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlEmbed {
    pub html: String,
    pub caption: String,
}

impl HtmlEmbed {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            html: f.string("html")?,
            caption: f.string("caption")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacerSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacer {
    pub height: SpacerSize,
}

impl Spacer {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            height: f.enum_or("height", SpacerSize::default()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    #[default]
    Line,
    Dots,
    Space,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Divider {
    pub style: DividerStyle,
}

impl Divider {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            style: f.enum_or("style", DividerStyle::default()),
        })
    }
}
