pub mod coerce;
pub mod from_raw;
pub mod json;
pub mod pagination;
pub mod payload;
pub mod pricing;

pub use coerce::{format_temporal, to_float, Temporal};
pub use from_raw::FromRaw;
pub use json::{Attr, JsonOptions, ToJson};
pub use pagination::Pagination;
pub use payload::RawObject;
pub use pricing::SeatPricing;
pub use crate::utils::error::Result;
