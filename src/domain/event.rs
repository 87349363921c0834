use chrono::{DateTime, FixedOffset};

use crate::core::from_raw::FromRaw;
use crate::core::json::{Attr, ToJson};
use crate::core::payload::{self, get_bool, get_i64, get_str, RawObject};

/// A show, attraction or other bookable product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub id: Option<String>,
    pub status: Option<String>,
    pub event_type: Option<String>,
    pub source_code: Option<String>,
    pub source: Option<String>,
    pub venue: Option<String>,
    pub description: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub max_running_time: Option<i64>,
    pub min_running_time: Option<i64>,
    pub start_date: Option<DateTime<FixedOffset>>,
    pub end_date: Option<DateTime<FixedOffset>>,
    pub is_seated: Option<bool>,
    pub needs_departure_date: Option<bool>,
    pub needs_duration: Option<bool>,
    pub needs_performance: Option<bool>,
    pub has_performances: Option<bool>,
    pub upsell_list: Vec<String>,
}

impl Event {
    pub fn new(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }
}

// date_range_start: {"iso8601_date_and_time": "..."}
fn range_date(raw: &RawObject, key: &str) -> Option<DateTime<FixedOffset>> {
    raw.get(key)
        .and_then(|value| value.as_object())
        .and_then(|range| payload::get_date_time(range, "iso8601_date_and_time"))
}

impl FromRaw for Event {
    fn from_object(raw: &RawObject) -> Option<Self> {
        let geo = raw.get("geo_data").and_then(|value| value.as_object());

        let upsell_list = payload::list(raw, "event_upsell_list", Some("event_id"))
            .iter()
            .filter_map(|id| id.as_str().map(str::to_string))
            .collect();

        Some(Self {
            id: get_str(raw, "event_id"),
            status: get_str(raw, "event_status"),
            event_type: get_str(raw, "event_type"),
            source_code: get_str(raw, "source_code"),
            source: get_str(raw, "source_desc"),
            venue: get_str(raw, "venue_desc"),
            description: get_str(raw, "event_desc"),
            postcode: get_str(raw, "postcode"),
            city: get_str(raw, "city_desc"),
            country: get_str(raw, "country_desc"),
            country_code: get_str(raw, "country_code"),
            latitude: geo.and_then(|geo| payload::get_f64(geo, "latitude")),
            longitude: geo.and_then(|geo| payload::get_f64(geo, "longitude")),
            max_running_time: get_i64(raw, "max_running_time"),
            min_running_time: get_i64(raw, "min_running_time"),
            start_date: range_date(raw, "date_range_start"),
            end_date: range_date(raw, "date_range_end"),
            is_seated: get_bool(raw, "is_seated"),
            needs_departure_date: get_bool(raw, "needs_departure_date"),
            needs_duration: get_bool(raw, "needs_duration"),
            needs_performance: get_bool(raw, "needs_performance"),
            has_performances: get_bool(raw, "has_no_perfs").map(|none| !none),
            upsell_list,
        })
    }
}

impl ToJson for Event {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("id", (&self.id).into()),
            ("status", (&self.status).into()),
            ("event_type", (&self.event_type).into()),
            ("source_code", (&self.source_code).into()),
            ("source", (&self.source).into()),
            ("venue", (&self.venue).into()),
            ("description", (&self.description).into()),
            ("postcode", (&self.postcode).into()),
            ("city", (&self.city).into()),
            ("country", (&self.country).into()),
            ("country_code", (&self.country_code).into()),
            ("latitude", self.latitude.into()),
            ("longitude", self.longitude.into()),
            ("max_running_time", self.max_running_time.into()),
            ("min_running_time", self.min_running_time.into()),
            ("start_date", self.start_date.into()),
            ("end_date", self.end_date.into()),
            ("is_seated", self.is_seated.into()),
            ("needs_departure_date", self.needs_departure_date.into()),
            ("needs_duration", self.needs_duration.into()),
            ("needs_performance", self.needs_performance.into()),
            ("has_performances", self.has_performances.into()),
            ("upsell_list", (&self.upsell_list).into()),
        ]
    }
}
