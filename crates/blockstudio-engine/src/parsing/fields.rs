//! Per-field default and coercion rules shared by every payload normalizer.
//!
//! A [`Fields`] reader wraps one persisted JSON object. Each accessor reads a
//! key, applies the documented default when the key is missing or `null`, and
//! coerces compatible scalar shapes. Values that cannot be coerced produce a
//! [`FieldError`] naming the full field path, which drops the whole block.
//!
//! Keys read through the accessors are recorded so the caller can collect the
//! ones no normalizer understood and carry them through untouched.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::models::rich_text::RichText;

/// A persisted field that cannot be coerced into its expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field `{field}` expected {expected}, found {found}")]
pub struct FieldError {
    pub field: String,
    pub expected: &'static str,
    pub found: &'static str,
}

/// Name of a JSON value's type, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reader over one persisted object that tracks which keys were consumed.
pub struct Fields<'a> {
    object: &'a Map<String, Value>,
    path: String,
    consumed: BTreeSet<String>,
}

impl<'a> Fields<'a> {
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self::nested(object, String::new())
    }

    fn nested(object: &'a Map<String, Value>, path: String) -> Self {
        Self {
            object,
            path,
            consumed: BTreeSet::new(),
        }
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn error(&self, key: &str, expected: &'static str, found: &Value) -> FieldError {
        FieldError {
            field: self.field_path(key),
            expected,
            found: json_type_name(found),
        }
    }

    /// Read a key, treating `null` the same as a missing key.
    fn take(&mut self, key: &str) -> Option<&'a Value> {
        self.consumed.insert(key.to_string());
        match self.object.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    /// Whether the key holds a non-null value. Does not consume the key.
    pub fn is_present(&self, key: &str) -> bool {
        !matches!(self.object.get(key), None | Some(Value::Null))
    }

    /// String field defaulting to `""`.
    pub fn string(&mut self, key: &str) -> Result<String, FieldError> {
        self.string_or(key, "")
    }

    /// String field with an explicit default. Numbers and booleans are stringified.
    pub fn string_or(&mut self, key: &str, default: &str) -> Result<String, FieldError> {
        match self.take(key) {
            None => Ok(default.to_string()),
            Some(value) => coerce_string(value).ok_or_else(|| self.error(key, "a string", value)),
        }
    }

    /// String field where an empty string means "not set".
    pub fn optional_string(&mut self, key: &str) -> Result<Option<String>, FieldError> {
        let value = self.string(key)?;
        Ok(Some(value).filter(|v| !v.is_empty()))
    }

    pub fn bool_or(&mut self, key: &str, default: bool) -> Result<bool, FieldError> {
        match self.take(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) if s == "true" => Ok(true),
            Some(Value::String(s)) if s == "false" => Ok(false),
            Some(value) => Err(self.error(key, "a boolean", value)),
        }
    }

    /// Integer field clamped into `range`. Fractions are rounded and numeric
    /// strings are accepted.
    pub fn integer_in<T>(
        &mut self,
        key: &str,
        default: T,
        range: RangeInclusive<T>,
    ) -> Result<T, FieldError>
    where
        T: Copy + Into<i64> + TryFrom<i64>,
    {
        let raw = match self.take(key) {
            None => return Ok(default),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.round() as i64)),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64),
            Some(_) => None,
        };

        let Some(raw) = raw else {
            let value = self.object.get(key).unwrap_or(&Value::Null);
            return Err(self.error(key, "an integer", value));
        };

        let (min, max) = ((*range.start()).into(), (*range.end()).into());
        Ok(T::try_from(raw.clamp(min, max)).unwrap_or(default))
    }

    /// Like [`Fields::integer_in`], but a missing key stays `None`.
    pub fn optional_integer_in<T>(
        &mut self,
        key: &str,
        range: RangeInclusive<T>,
    ) -> Result<Option<T>, FieldError>
    where
        T: Copy + Into<i64> + TryFrom<i64>,
    {
        if !self.is_present(key) {
            self.take(key);
            return Ok(None);
        }
        let fallback = *range.start();
        self.integer_in(key, fallback, range).map(Some)
    }

    /// Enumerated field. Anything that is not one of the enum's persisted
    /// values falls back to `default`.
    pub fn enum_or<E: DeserializeOwned>(&mut self, key: &str, default: E) -> E {
        self.take(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or(default)
    }

    /// Rich-text field, migrating legacy plain strings.
    pub fn rich_text(&mut self, key: &str) -> Result<RichText, FieldError> {
        let value = self.take(key);
        RichText::migrate(value).map_err(|err| FieldError {
            field: self.field_path(key),
            expected: "a rich-text document or string",
            found: err.found,
        })
    }

    /// List of strings, or `None` when the key is missing.
    pub fn string_list(&mut self, key: &str) -> Result<Option<Vec<String>>, FieldError> {
        let Some(value) = self.take(key) else {
            return Ok(None);
        };
        let Value::Array(values) = value else {
            return Err(self.error(key, "an array", value));
        };

        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                coerce_string(v).ok_or_else(|| self.error(&format!("{key}[{i}]"), "a string", v))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Matrix of strings (e.g. table rows), or `None` when the key is missing.
    pub fn string_matrix(&mut self, key: &str) -> Result<Option<Vec<Vec<String>>>, FieldError> {
        let Some(value) = self.take(key) else {
            return Ok(None);
        };
        let Value::Array(rows) = value else {
            return Err(self.error(key, "an array", value));
        };

        let mut matrix = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let Value::Array(cells) = row else {
                return Err(self.error(&format!("{key}[{r}]"), "an array", row));
            };
            let mut out = Vec::with_capacity(cells.len());
            for (c, cell) in cells.iter().enumerate() {
                let cell_string = match cell {
                    Value::Null => String::new(),
                    other => coerce_string(other)
                        .ok_or_else(|| self.error(&format!("{key}[{r}][{c}]"), "a string", other))?,
                };
                out.push(cell_string);
            }
            matrix.push(out);
        }
        Ok(Some(matrix))
    }

    /// Array of sub-objects, each normalized by `normalize`. Missing → empty.
    pub fn items<T>(
        &mut self,
        key: &str,
        normalize: impl Fn(&mut Fields<'a>) -> Result<T, FieldError>,
    ) -> Result<Vec<T>, FieldError> {
        Ok(self.optional_items(key, normalize)?.unwrap_or_default())
    }

    /// Array of sub-objects, or `None` when the key is missing.
    pub fn optional_items<T>(
        &mut self,
        key: &str,
        normalize: impl Fn(&mut Fields<'a>) -> Result<T, FieldError>,
    ) -> Result<Option<Vec<T>>, FieldError> {
        let Some(value) = self.take(key) else {
            return Ok(None);
        };
        let Value::Array(entries) = value else {
            return Err(self.error(key, "an array", value));
        };

        let mut items = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let item_path = self.field_path(&format!("{key}[{i}]"));
            let Value::Object(object) = entry else {
                return Err(FieldError {
                    field: item_path,
                    expected: "an object",
                    found: json_type_name(entry),
                });
            };
            let mut item_fields = Fields::nested(object, item_path);
            items.push(normalize(&mut item_fields)?);
        }
        Ok(Some(items))
    }

    /// Every key in the object that no accessor read, minus `reserved`.
    pub fn unconsumed(&self, reserved: &[&str]) -> Map<String, Value> {
        self.object
            .iter()
            .filter(|(key, _)| {
                !self.consumed.contains(key.as_str()) && !reserved.contains(&key.as_str())
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
