use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::parsing::fields::{FieldError, Fields};

/// Persisted keys owned by [`LayoutSettings`] rather than by any payload.
pub const LAYOUT_KEYS: [&str; 5] = ["background", "paddingTop", "paddingBottom", "maxWidth", "anchor"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    White,
    Gray,
    Primary,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxWidth {
    #[default]
    Xl,
    Full,
}

/// Kind-independent presentation settings carried by every block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    pub background: Background,
    pub padding_top: Padding,
    pub padding_bottom: Padding,
    pub max_width: MaxWidth,
    /// In-page navigation target. Free-form; see [`LayoutSettings::anchor_is_fragment_safe`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl LayoutSettings {
    /// Read layout settings from a persisted block object.
    ///
    /// Every setting is defaulted on its own; an empty anchor counts as absent.
    pub fn normalize(fields: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            background: fields.enum_or("background", Background::default()),
            padding_top: fields.enum_or("paddingTop", Padding::default()),
            padding_bottom: fields.enum_or("paddingBottom", Padding::default()),
            max_width: fields.enum_or("maxWidth", MaxWidth::default()),
            anchor: fields.optional_string("anchor")?,
        })
    }

    /// Drop an empty anchor so the settings survive a persistence round trip.
    pub fn normalized(mut self) -> Self {
        if self.anchor.as_deref() == Some("") {
            self.anchor = None;
        }
        self
    }

    /// Whether the anchor can be used as a URL fragment without escaping.
    ///
    /// Advisory only: anchors are stored as entered.
    pub fn anchor_is_fragment_safe(&self) -> bool {
        static FRAGMENT_REGEX: OnceLock<Regex> = OnceLock::new();
        let fragment_regex = FRAGMENT_REGEX
            .get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("Invalid anchor regex"));

        self.anchor
            .as_deref()
            .is_none_or(|anchor| fragment_regex.is_match(anchor))
    }

    pub(crate) fn write_into(&self, out: &mut Map<String, Value>) -> Result<(), serde_json::Error> {
        if let Value::Object(map) = serde_json::to_value(self)? {
            out.extend(map);
        }
        Ok(())
    }
}
