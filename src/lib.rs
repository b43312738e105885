//! Data-Shaping Utilities
//!
//! This library provides small, pure helpers used by a host application:
//! human-readable byte and nanosecond formatting, own-property lookup, leaf-only
//! dotted path resolution, record flattening, and multi-way set algebra.
//!
//! None of the helpers perform I/O or hold state between calls, so every one of
//! them is safe to call concurrently.

pub mod models;
pub mod services;

pub use models::{Callable, FlatMap, Record, Value};
pub use services::format::{
    ByteFormatOptions, format_bytes, format_bytes_with, format_duration, format_nanoseconds,
};
pub use services::path::{
    PathOptions, document_properties, flatten, flatten_with, resolve_path, resolve_path_with,
};
pub use services::property::{PropertySource, get_own_property, get_own_property_from};
pub use services::sets::{set_difference, set_intersection, set_union};

use std::result;

/// Custom error type for the library
///
/// Only the JSON conversion boundaries produce errors; lookups signal
/// "not found" with `None`.
#[derive(Debug)]
pub enum Error {
    InvalidInput(String),
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            Error::InvalidInput(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

pub type Result<T> = result::Result<T, Error>;
