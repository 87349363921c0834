use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat};
use serde_json::Value;

/// Date or date-time value carried by an entity attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl From<NaiveDate> for Temporal {
    fn from(value: NaiveDate) -> Self {
        Temporal::Date(value)
    }
}

impl From<DateTime<FixedOffset>> for Temporal {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Temporal::DateTime(value)
    }
}

impl From<NaiveDateTime> for Temporal {
    fn from(value: NaiveDateTime) -> Self {
        Temporal::Naive(value)
    }
}

/// 將原始數值轉為 f64，缺值或 null 回傳 None
pub fn to_float(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Null => None,
        Value::Number(number) => number.as_f64(),
        Value::String(text) => match text.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Some(parsed),
            _ => {
                tracing::warn!("⚠️ Ignoring non-numeric value '{}'", text);
                None
            }
        },
        other => {
            tracing::warn!("⚠️ Ignoring non-numeric value {}", other);
            None
        }
    }
}

/// Canonical text form: `2017-01-25` for dates, `2017-01-25T12:39:40+00:00` for
/// offset date-times. Fractional seconds appear only when non-zero.
pub fn format_temporal(value: &Temporal) -> String {
    match value {
        Temporal::Date(date) => date.format("%Y-%m-%d").to_string(),
        Temporal::DateTime(date_time) => date_time.to_rfc3339_opts(SecondsFormat::AutoSi, false),
        Temporal::Naive(date_time) => date_time.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
    }
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// 解析 API 提供的 ISO-8601 時間字串
pub fn parse_date_time(text: &str) -> Option<DateTime<FixedOffset>> {
    match DateTime::parse_from_rfc3339(text.trim()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("⚠️ Ignoring unparseable date-time '{}': {}", text, e);
            None
        }
    }
}
