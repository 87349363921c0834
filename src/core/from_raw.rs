use serde_json::Value;

use crate::core::payload::{self, RawObject};

/// Builds a typed entity from a raw API payload.
///
/// Absent, `null`, empty or non-object payloads yield `None`; that means
/// "entity not present" and is never an error.
pub trait FromRaw: Sized {
    /// Maps a non-empty raw object. Returning `None` marks the entity absent.
    fn from_object(raw: &RawObject) -> Option<Self>;

    fn from_raw(payload: Option<&Value>) -> Option<Self> {
        payload::object(payload).and_then(Self::from_object)
    }
}

/// Nested entity stored under `key`.
pub fn nested<T: FromRaw>(raw: &RawObject, key: &str) -> Option<T> {
    T::from_raw(raw.get(key))
}

/// Sequence of entities stored directly under `key`.
pub fn sequence<T: FromRaw>(raw: &RawObject, key: &str) -> Vec<T> {
    collect(payload::list(raw, key, None), key)
}

/// Sequence of entities nested as `{key: {wrapper: [...]}}`, falling back to a
/// bare array under `key`.
pub fn wrapped_sequence<T: FromRaw>(raw: &RawObject, key: &str, wrapper: &str) -> Vec<T> {
    collect(payload::list(raw, key, Some(wrapper)), key)
}

fn collect<T: FromRaw>(items: &[Value], key: &str) -> Vec<T> {
    let mapped: Vec<T> = items.iter().filter_map(|item| T::from_raw(Some(item))).collect();
    if mapped.len() != items.len() {
        tracing::debug!(
            "Skipped {} empty entries under '{}'",
            items.len() - mapped.len(),
            key
        );
    }
    mapped
}
