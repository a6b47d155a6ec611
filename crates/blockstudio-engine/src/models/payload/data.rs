//! Tabular blocks. Both keep every row exactly as wide as the header row.

use serde::Serialize;

use crate::models::payload::UnknownFields;
use crate::parsing::fields::{FieldError, Fields};

/// Placeholder header for the `n`th column (1-based).
pub fn placeholder_header(n: usize) -> String {
    format!("Kolumn {n}")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub caption: String,
    pub striped: bool,
}

impl Default for SimpleTable {
    /// Two placeholder headers over a single empty row.
    fn default() -> Self {
        let headers = vec![placeholder_header(1), placeholder_header(2)];
        let rows = vec![vec![String::new(); headers.len()]];
        Self {
            headers,
            rows,
            caption: String::new(),
            striped: true,
        }
    }
}

impl SimpleTable {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        let defaults = Self::default();
        let mut headers = f.string_list("headers")?.unwrap_or(defaults.headers);
        let mut rows = match f.string_matrix("rows")? {
            Some(rows) => rows,
            None => vec![vec![String::new(); headers.len()]],
        };
        square_up(&mut headers, &mut rows);

        Ok(Self {
            headers,
            rows,
            caption: f.string("caption")?,
            striped: f.bool_or("striped", true)?,
        })
    }
}

/// Pad short rows with empty cells; grow the headers when a row is wider.
fn square_up(headers: &mut Vec<String>, rows: &mut [Vec<String>]) {
    let width = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);

    while headers.len() < width {
        headers.push(placeholder_header(headers.len() + 1));
    }
    for row in rows {
        row.resize(width, String::new());
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub feature: String,
    /// One cell per plan, in plan order.
    pub values: Vec<String>,
    #[serde(flatten)]
    pub extra: UnknownFields,
}

impl ComparisonRow {
    fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            feature: f.string("feature")?,
            values: f.string_list("values")?.unwrap_or_default(),
            extra: UnknownFields::remaining(f),
        })
    }
}

/// Feature-by-plan comparison grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub title: String,
    pub plans: Vec<String>,
    pub rows: Vec<ComparisonRow>,
    /// Index into `plans` of the plan to emphasise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_plan: Option<u8>,
}

impl Default for Comparison {
    fn default() -> Self {
        Self {
            title: String::new(),
            plans: vec!["Bas".to_string(), "Premium".to_string()],
            rows: vec![ComparisonRow {
                feature: String::new(),
                values: vec![String::new(); 2],
                ..Default::default()
            }],
            highlighted_plan: None,
        }
    }
}

impl Comparison {
    pub(crate) fn normalize(f: &mut Fields<'_>) -> Result<Self, FieldError> {
        let plans = f.string_list("plans")?.unwrap_or_default();
        let mut rows = f.items("rows", ComparisonRow::normalize)?;
        for row in &mut rows {
            if row.values.len() < plans.len() {
                row.values.resize(plans.len(), String::new());
            }
        }
        let highlighted_plan = f
            .optional_integer_in("highlightedPlan", 0..=u8::MAX)?
            .filter(|&ix| usize::from(ix) < plans.len());

        Ok(Self {
            title: f.string("title")?,
            plans,
            rows,
            highlighted_plan,
        })
    }
}
