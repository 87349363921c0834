use chrono::{DateTime, FixedOffset};

use crate::core::from_raw::FromRaw;
use crate::core::json::{Attr, ToJson};
use crate::core::payload::{get_bool, get_date_time, get_i64, get_str, RawObject};

/// One dated occurrence of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Performance {
    pub id: Option<String>,
    pub event_id: Option<String>,
    pub name: Option<String>,
    pub date_time: Option<DateTime<FixedOffset>>,
    pub date_description: Option<String>,
    pub time_description: Option<String>,
    pub has_pool_seats: Option<bool>,
    pub is_limited: Option<bool>,
    pub is_ghost: Option<bool>,
    pub cached_max_seats: Option<i64>,
    pub running_time: Option<i64>,
}

impl Performance {
    pub fn new(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }
}

impl FromRaw for Performance {
    fn from_object(raw: &RawObject) -> Option<Self> {
        Some(Self {
            id: get_str(raw, "perf_id"),
            event_id: get_str(raw, "event_id"),
            name: get_str(raw, "perf_name"),
            date_time: get_date_time(raw, "iso8601_date_and_time"),
            date_description: get_str(raw, "date_desc"),
            time_description: get_str(raw, "time_desc"),
            has_pool_seats: get_bool(raw, "has_pool_seats"),
            is_limited: get_bool(raw, "is_limited"),
            is_ghost: get_bool(raw, "is_ghost"),
            cached_max_seats: get_i64(raw, "cached_max_seats"),
            running_time: get_i64(raw, "running_time"),
        })
    }
}

impl ToJson for Performance {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("id", (&self.id).into()),
            ("event_id", (&self.event_id).into()),
            ("name", (&self.name).into()),
            ("date_time", self.date_time.into()),
            ("date_description", (&self.date_description).into()),
            ("time_description", (&self.time_description).into()),
            ("has_pool_seats", self.has_pool_seats.into()),
            ("is_limited", self.is_limited.into()),
            ("is_ghost", self.is_ghost.into()),
            ("cached_max_seats", self.cached_max_seats.into()),
            ("running_time", self.running_time.into()),
        ]
    }
}
