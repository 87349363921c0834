//! Typed mapping layer for ticketing API payloads.
//!
//! Raw payloads (`serde_json::Value`) become typed entities through
//! [`FromRaw`], and typed entities become JSON again through [`ToJson`].
//! Transport and authentication are left to callers.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::FilePayloadSource;
pub use config::toml_config::TomlConfig;
pub use core::{FromRaw, JsonOptions, Pagination, SeatPricing, ToJson};
pub use domain::ports::PayloadSource;
pub use domain::EntityKind;
pub use utils::error::{MappingError, Result};
