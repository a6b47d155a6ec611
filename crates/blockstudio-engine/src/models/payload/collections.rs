use serde::{Deserialize, Serialize};

use crate::models::payload::UnknownFields;
use crate::models::rich_text::RichText;
use crate::parsing::fields::{FieldError, Fields};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    pub answer: RichText,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl FaqItem {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            question: f.string("question")?,
            answer: f.rich_text("answer")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub title: String,
    pub items: Vec<FaqItem>,
}

impl Faq {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            items: f.items("items", FaqItem::normalize)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionItem {
    pub title: String,
    pub content: RichText,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl AccordionItem {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            content: f.rich_text("content")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accordion {
    pub title: String,
    pub items: Vec<AccordionItem>,
    /// Whether several panels may be open at once.
    pub allow_multiple: bool,
}

impl Accordion {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            items: f.items("items", AccordionItem::normalize)?,
            allow_multiple: f.bool_or("allowMultiple", false)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub label: String,
    pub content: RichText,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl Tab {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            label: f.string("label")?,
            content: f.rich_text("content")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tabs {
    pub tabs: Vec<Tab>,
}

impl Tabs {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            tabs: f.items("tabs", Tab::normalize)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    /// Free-form date label ("2019", "Hösten 2021").
    pub date: String,
    pub title: String,
    pub description: RichText,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl TimelineItem {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            date: f.string("date")?,
            title: f.string("title")?,
            description: f.rich_text("description")?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub title: String,
    pub items: Vec<TimelineItem>,
}

impl Timeline {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            items: f.items("items", TimelineItem::normalize)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialLayout {
    #[default]
    Grid,
    Carousel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
    pub image: String,
    /// Star rating 1..=5, absent when the testimonial is unrated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl Testimonial {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            quote: f.string("quote")?,
            author: f.string("author")?,
            role: f.string("role")?,
            company: f.string("company")?,
            image: f.string("image")?,
            rating: f.optional_integer_in("rating", 1..=5)?,
            extra: UnknownFields::remaining(f),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonials {
    pub title: String,
    pub items: Vec<Testimonial>,
    pub layout: TestimonialLayout,
}

impl Testimonials {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            title: f.string("title")?,
            items: f.items("items", Testimonial::normalize)?,
            layout: f.enum_or("layout", TestimonialLayout::default()),
        })
    }
}

/// A single highlighted testimonial.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialSingle {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
    pub image: String,
}

impl TestimonialSingle {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            quote: f.string("quote")?,
            author: f.string("author")?,
            role: f.string("role")?,
            company: f.string("company")?,
            image: f.string("image")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn object(value: Value) -> serde_json::Map<String, Value> {
        let Value::Object(obj) = value else {
            panic!("expected object")
        };
        obj
    }

    #[test]
    fn test_faq_answers_are_migrated() {
        let obj = object(json!({
            "items": [{ "question": "Vad kostar det?", "answer": "Från 499 kr." }]
        }));
        let faq = Faq::normalize(&mut Fields::new(&obj)).unwrap();
        assert_eq!(faq.items[0].question, "Vad kostar det?");
        assert_eq!(faq.items[0].answer.plain_text(), "Från 499 kr.");
    }

    #[test]
    fn test_null_items_become_empty() {
        let obj = object(json!({ "title": "Historia", "items": null }));
        let timeline = Timeline::normalize(&mut Fields::new(&obj)).unwrap();
        assert_eq!(timeline.items, Vec::new());
    }

    #[test]
    fn test_items_that_are_not_arrays_are_malformed() {
        let obj = object(json!({ "tabs": "Flik 1" }));
        let err = Tabs::normalize(&mut Fields::new(&obj)).unwrap_err();
        assert_eq!(err.field, "tabs");
        assert_eq!(err.found, "string");
    }

    #[test]
    fn test_testimonial_rating_is_optional_and_clamped() {
        let obj = object(json!({
            "items": [
                { "quote": "Bäst!", "rating": 9 },
                { "quote": "Bra", "rating": null },
                { "quote": "Okej" }
            ]
        }));
        let testimonials = Testimonials::normalize(&mut Fields::new(&obj)).unwrap();
        let ratings: Vec<_> = testimonials.items.iter().map(|t| t.rating).collect();
        assert_eq!(ratings, vec![Some(5), None, None]);
    }
}
