use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::cards::{DEFAULT_COLUMNS, MAX_COLUMNS};
use crate::models::payload::UnknownFields;
use crate::parsing::fields::{FieldError, Fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
    #[default]
    Full,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleImage {
    pub image: String,
    pub alt: String,
    pub caption: String,
    pub link: String,
    pub size: ImageSize,
    pub rounded: bool,
}

impl SingleImage {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            image: f.string("image")?,
            alt: f.string("alt")?,
            caption: f.string("caption")?,
            link: f.string("link")?,
            size: f.enum_or("size", ImageSize::default()),
            rounded: f.bool_or("rounded", false)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    #[default]
    Grid,
    Masonry,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
    pub caption: String,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl GalleryImage {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            url: f.string("url")?,
            alt: f.string("alt")?,
            caption: f.string("caption")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGallery {
    pub title: String,
    pub images: Vec<GalleryImage>,
    pub columns: u8,
    pub layout: GalleryLayout,
}

impl Default for ImageGallery {
    fn default() -> Self {
        Self {
            title: String::new(),
            images: Vec::new(),
            columns: DEFAULT_COLUMNS,
            layout: GalleryLayout::Grid,
        }
    }
}

impl ImageGallery {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            images: f.items("images", GalleryImage::normalize)?,
            columns: f.integer_in("columns", DEFAULT_COLUMNS, 1..=MAX_COLUMNS)?,
            layout: f.enum_or("layout", GalleryLayout::default()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "1:1")]
    Square,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEmbed {
    /// The URL as pasted by the editor (watch page, share link or embed URL).
    pub url: String,
    pub title: String,
    pub caption: String,
    pub aspect_ratio: AspectRatio,
    pub autoplay: bool,
}

impl VideoEmbed {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            url: f.string("url")?,
            title: f.string("title")?,
            caption: f.string("caption")?,
            aspect_ratio: f.enum_or("aspectRatio", AspectRatio::default()),
            autoplay: f.bool_or("autoplay", false)?,
        })
    }

    /// Player URL for the pasted video link, if it is a YouTube or Vimeo link.
    pub fn embed_url(&self) -> Option<String> {
        static YOUTUBE_REGEX: OnceLock<Regex> = OnceLock::new();
        static VIMEO_REGEX: OnceLock<Regex> = OnceLock::new();
        let youtube_regex = YOUTUBE_REGEX.get_or_init(|| {
            Regex::new(
                r"^https?://(?:www\.|m\.)?(?:youtube\.com/(?:watch\?(?:.*&)?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{11})",
            )
            .expect("Invalid YouTube regex")
        });
        let vimeo_regex = VIMEO_REGEX.get_or_init(|| {
            Regex::new(r"^https?://(?:www\.|player\.)?vimeo\.com/(?:video/)?(\d+)")
                .expect("Invalid Vimeo regex")
        });

        let url = self.url.trim();
        if let Some(caps) = youtube_regex.captures(url) {
            return Some(format!("https://www.youtube-nocookie.com/embed/{}", &caps[1]));
        }
        if let Some(caps) = vimeo_regex.captures(url) {
            return Some(format!("https://player.vimeo.com/video/{}", &caps[1]));
        }
        None
    }
}

pub const DEFAULT_MAP_HEIGHT: u16 = 400;
pub const DEFAULT_MAP_ZOOM: u8 = 14;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapEmbed {
    pub title: String,
    pub address: String,
    /// Pixels.
    pub height: u16,
    pub zoom: u8,
}

impl Default for MapEmbed {
    fn default() -> Self {
        Self {
            title: String::new(),
            address: String::new(),
            height: DEFAULT_MAP_HEIGHT,
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl MapEmbed {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            address: f.string("address")?,
            height: f.integer_in("height", DEFAULT_MAP_HEIGHT, 200..=1000)?,
            zoom: f.integer_in("zoom", DEFAULT_MAP_ZOOM, 1..=20)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        Some("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ")
    )]
    #[case(
        "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
        Some("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ")
    )]
    #[case(
        "https://youtu.be/dQw4w9WgXcQ?t=42",
        Some("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ")
    )]
    #[case(
        "https://www.youtube.com/embed/dQw4w9WgXcQ",
        Some("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ")
    )]
    #[case("https://vimeo.com/76979871", Some("https://player.vimeo.com/video/76979871"))]
    #[case(
        "https://player.vimeo.com/video/76979871",
        Some("https://player.vimeo.com/video/76979871")
    )]
    #[case("https://example.com/film.mp4", None)]
    #[case("", None)]
    fn test_embed_url(#[case] url: &str, #[case] expected: Option<&str>) {
        let video = VideoEmbed {
            url: url.to_string(),
            ..Default::default()
        };
        assert_eq!(video.embed_url().as_deref(), expected);
    }

    #[test]
    fn test_aspect_ratio_wire_values() {
        assert_eq!(
            serde_json::to_value(AspectRatio::Standard).unwrap(),
            serde_json::json!("4:3")
        );
    }

    #[test]
    fn test_map_height_is_clamped() {
        let serde_json::Value::Object(obj) = serde_json::json!({ "height": 50, "zoom": "12" })
        else {
            unreachable!()
        };
        let map = MapEmbed::normalize(&mut Fields::new(&obj)).unwrap();
        assert_eq!(map.height, 200);
        assert_eq!(map.zoom, 12);
    }
}
