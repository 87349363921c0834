// Adapters layer: concrete implementations of the domain ports.

pub mod file;

pub use file::FilePayloadSource;
