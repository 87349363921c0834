//! Defensive lookups against raw API payloads.
//!
//! Every helper treats a missing key, a `null` and a value of the wrong shape
//! the same way: as absent. Nothing here fails.

use serde_json::{Map, Value};

use crate::core::coerce::{self, to_float};
use chrono::{DateTime, FixedOffset, NaiveDate};

pub type RawObject = Map<String, Value>;

/// Returns the payload as a mapping when it is a non-empty object.
pub fn object(payload: Option<&Value>) -> Option<&RawObject> {
    payload
        .and_then(Value::as_object)
        .filter(|raw| !raw.is_empty())
}

/// Follows a chain of object keys, e.g. `["results", "paging_status"]`.
pub fn get_path<'a>(payload: Option<&'a Value>, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(payload?, |current, key| current.as_object()?.get(*key))
}

pub fn get_str(raw: &RawObject, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

pub fn get_i64(raw: &RawObject, key: &str) -> Option<i64> {
    match raw.get(key)? {
        Value::Number(number) => number.as_i64().or_else(|| {
            let whole = number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64);
            if whole.is_none() {
                tracing::warn!("⚠️ Ignoring non-integer value {} for '{}'", number, key);
            }
            whole
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

pub fn get_f64(raw: &RawObject, key: &str) -> Option<f64> {
    to_float(raw.get(key))
}

pub fn get_bool(raw: &RawObject, key: &str) -> Option<bool> {
    raw.get(key)?.as_bool()
}

pub fn get_date(raw: &RawObject, key: &str) -> Option<NaiveDate> {
    raw.get(key)?.as_str().and_then(coerce::parse_date)
}

pub fn get_date_time(raw: &RawObject, key: &str) -> Option<DateTime<FixedOffset>> {
    raw.get(key)?.as_str().and_then(coerce::parse_date_time)
}

/// Array stored under `key`, unwrapping one level of `{wrapper: [...]}` when
/// the API nests it under a singular key. Absent or mis-shaped ⇒ empty.
pub fn list<'a>(raw: &'a RawObject, key: &str, wrapper: Option<&str>) -> &'a [Value] {
    let items = match (raw.get(key), wrapper) {
        (Some(Value::Array(items)), _) => Some(items),
        (Some(Value::Object(inner)), Some(wrapper)) => inner.get(wrapper).and_then(Value::as_array),
        _ => None,
    };
    items.map(Vec::as_slice).unwrap_or(&[])
}
