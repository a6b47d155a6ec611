use serde::{Deserialize, Serialize};

use super::hero::ImagePosition;
use crate::models::payload::UnknownFields;
use crate::models::rich_text::RichText;
use crate::parsing::fields::{FieldError, Fields};

pub const DEFAULT_SUBMIT_TEXT: &str = "Skicka";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Tack för ditt meddelande! Vi hör av oss snart.";
pub const DEFAULT_BUTTON_TEXT: &str = "Läs mer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cta {
    pub title: String,
    pub description: RichText,
    pub button_text: String,
    pub button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
    pub alignment: Alignment,
}

impl Default for Cta {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: RichText::empty(),
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            button_link: String::new(),
            secondary_button_text: String::new(),
            secondary_button_link: String::new(),
            alignment: Alignment::Center,
        }
    }
}

impl Cta {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            description: f.rich_text("description")?,
            button_text: f.string_or("buttonText", DEFAULT_BUTTON_TEXT)?,
            button_link: f.string("buttonLink")?,
            secondary_button_text: f.string("secondaryButtonText")?,
            secondary_button_link: f.string("secondaryButtonLink")?,
            alignment: f.enum_or("alignment", Alignment::default()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaWithImage {
    pub title: String,
    pub description: RichText,
    pub button_text: String,
    pub button_link: String,
    pub image: String,
    pub image_alt: String,
    pub image_position: ImagePosition,
}

impl Default for CtaWithImage {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: RichText::empty(),
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            button_link: String::new(),
            image: String::new(),
            image_alt: String::new(),
            image_position: ImagePosition::Right,
        }
    }
}

impl CtaWithImage {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            description: f.rich_text("description")?,
            button_text: f.string_or("buttonText", DEFAULT_BUTTON_TEXT)?,
            button_link: f.string("buttonLink")?,
            image: f.string("image")?,
            image_alt: f.string("imageAlt")?,
            image_position: f.enum_or("imagePosition", ImagePosition::default()),
        })
    }
}

/// Compact call to action placed inside running text, e.g. in blog posts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineCta {
    pub title: String,
    pub text: String,
    pub button_text: String,
    pub button_link: String,
    pub variant: ButtonVariant,
}

impl Default for InlineCta {
    fn default() -> Self {
        Self {
            title: String::new(),
            text: String::new(),
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            button_link: String::new(),
            variant: ButtonVariant::Primary,
        }
    }
}

impl InlineCta {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            text: f.string("text")?,
            button_text: f.string_or("buttonText", DEFAULT_BUTTON_TEXT)?,
            button_link: f.string("buttonLink")?,
            variant: f.enum_or("variant", ButtonVariant::default()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Tel,
    Textarea,
    Select,
    Checkbox,
}

/// One input in a contact or lead form.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub placeholder: String,
    /// Choices for `select` fields.
    pub options: Vec<String>,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl FormField {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            name: f.string("name")?,
            label: f.string("label")?,
            field_type: f.enum_or("type", FieldType::default()),
            required: f.bool_or("required", false)?,
            placeholder: f.string("placeholder")?,
            options: f.string_list("options")?.unwrap_or_default(),
            extra: UnknownFields::remaining(f),
        })
    }

    fn new(name: &str, label: &str, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            required,
            ..Default::default()
        }
    }
}

/// Name, email and message: the fields a freshly created form starts with.
pub fn default_form_fields() -> Vec<FormField> {
    vec![
        FormField::new("name", "Namn", FieldType::Text, true),
        FormField::new("email", "E-post", FieldType::Email, true),
        FormField::new("message", "Meddelande", FieldType::Textarea, false),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub title: String,
    pub description: RichText,
    /// Where submissions are delivered. Empty means the site default.
    pub recipient_email: String,
    pub submit_text: String,
    pub success_message: String,
    pub fields: Vec<FormField>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: RichText::empty(),
            recipient_email: String::new(),
            submit_text: DEFAULT_SUBMIT_TEXT.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            fields: default_form_fields(),
        }
    }
}

impl ContactForm {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            description: f.rich_text("description")?,
            recipient_email: f.string("recipientEmail")?,
            submit_text: f.string_or("submitText", DEFAULT_SUBMIT_TEXT)?,
            success_message: f.string_or("successMessage", DEFAULT_SUCCESS_MESSAGE)?,
            fields: f.items("fields", FormField::normalize)?,
        })
    }
}
