//! Generic projection of typed entities back into JSON.
//!
//! Entities declare their attributes once, in order, through
//! [`ToJson::json_attributes`]; the projection rules live here and apply to
//! every entity alike. Output is lossy by default: absent values and empty
//! collections are dropped unless [`JsonOptions`] says otherwise.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde_json::{Map, Number, Value};

use crate::core::coerce::{format_temporal, Temporal};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    pub hide_none: bool,
    pub hide_empty: bool,
}

impl JsonOptions {
    pub fn new(hide_none: bool, hide_empty: bool) -> Self {
        Self {
            hide_none,
            hide_empty,
        }
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// A borrowed view of one entity attribute.
pub enum Attr<'a> {
    Absent,
    Str(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
    Temporal(Temporal),
    Entity(&'a dyn ToJson),
    List(Vec<Attr<'a>>),
    Map(Vec<(&'a str, Attr<'a>)>),
}

impl<'a> Attr<'a> {
    pub fn entity<T: ToJson>(value: Option<&'a T>) -> Self {
        match value {
            Some(entity) => Attr::Entity(entity),
            None => Attr::Absent,
        }
    }

    pub fn entities<T: ToJson>(items: &'a [T]) -> Self {
        Attr::List(items.iter().map(|item| Attr::Entity(item)).collect())
    }

    pub fn entity_map<T: ToJson>(map: &'a BTreeMap<String, T>) -> Self {
        Attr::Map(
            map.iter()
                .map(|(key, value)| (key.as_str(), Attr::Entity(value)))
                .collect(),
        )
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Attr::Absent)
    }

    pub fn is_empty_collection(&self) -> bool {
        match self {
            Attr::List(items) => items.is_empty(),
            Attr::Map(entries) => entries.is_empty(),
            _ => false,
        }
    }

    fn project(&self, options: JsonOptions) -> Value {
        match self {
            Attr::Absent => Value::Null,
            Attr::Str(text) => Value::String((*text).to_string()),
            Attr::Int(number) => Value::from(*number),
            Attr::Float(number) => Number::from_f64(*number)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Attr::Bool(flag) => Value::Bool(*flag),
            Attr::Temporal(value) => Value::String(format_temporal(value)),
            Attr::Entity(entity) => Value::Object(entity.to_json_dict(options)),
            Attr::List(items) => {
                Value::Array(items.iter().map(|item| item.project(options)).collect())
            }
            Attr::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| ((*key).to_string(), value.project(options)))
                    .collect(),
            ),
        }
    }
}

impl<'a> From<&'a str> for Attr<'a> {
    fn from(value: &'a str) -> Self {
        Attr::Str(value)
    }
}

impl<'a> From<&'a String> for Attr<'a> {
    fn from(value: &'a String) -> Self {
        Attr::Str(value)
    }
}

impl<'a> From<&'a Option<String>> for Attr<'a> {
    fn from(value: &'a Option<String>) -> Self {
        value.as_deref().map_or(Attr::Absent, Attr::Str)
    }
}

impl<'a> From<&'a Vec<String>> for Attr<'a> {
    fn from(value: &'a Vec<String>) -> Self {
        Attr::List(value.iter().map(|item| Attr::Str(item)).collect())
    }
}

impl<'a> From<&'a BTreeMap<String, String>> for Attr<'a> {
    fn from(value: &'a BTreeMap<String, String>) -> Self {
        Attr::Map(
            value
                .iter()
                .map(|(key, item)| (key.as_str(), Attr::Str(item)))
                .collect(),
        )
    }
}

impl From<i64> for Attr<'_> {
    fn from(value: i64) -> Self {
        Attr::Int(value)
    }
}

impl From<f64> for Attr<'_> {
    fn from(value: f64) -> Self {
        Attr::Float(value)
    }
}

impl From<bool> for Attr<'_> {
    fn from(value: bool) -> Self {
        Attr::Bool(value)
    }
}

impl From<Temporal> for Attr<'_> {
    fn from(value: Temporal) -> Self {
        Attr::Temporal(value)
    }
}

impl From<NaiveDate> for Attr<'_> {
    fn from(value: NaiveDate) -> Self {
        Attr::Temporal(value.into())
    }
}

impl From<DateTime<FixedOffset>> for Attr<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Attr::Temporal(value.into())
    }
}

// 可選值：None 對應 Absent
impl<'a, T> From<Option<T>> for Attr<'a>
where
    T: Into<Attr<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Attr::Absent, Into::into)
    }
}

/// Uniform JSON projection for any typed entity.
pub trait ToJson {
    /// Attribute names and values in declaration order.
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)>;

    fn to_json_dict(&self, options: JsonOptions) -> Map<String, Value> {
        let mut result = Map::new();
        for (name, attr) in self.json_attributes() {
            if attr.is_absent() && options.hide_none {
                continue;
            }
            if attr.is_empty_collection() && options.hide_empty {
                continue;
            }
            result.insert(name.to_string(), attr.project(options));
        }
        result
    }

    fn to_json_string(&self, options: JsonOptions) -> Result<String> {
        Ok(serde_json::to_string(&Value::Object(
            self.to_json_dict(options),
        ))?)
    }

    fn to_json_string_pretty(&self, options: JsonOptions) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Value::Object(
            self.to_json_dict(options),
        ))?)
    }

    fn as_dict_for_json(&self) -> Map<String, Value> {
        self.to_json_dict(JsonOptions::default())
    }

    fn as_json(&self) -> Result<String> {
        self.to_json_string(JsonOptions::default())
    }
}
