//! Own-property lookup with a fallback when the preferred probe is unavailable

use crate::models::{Record, Value};

/// Common interface for anything that can answer own-property questions.
///
/// `has_own` is the preferred probe. A source that cannot answer it returns
/// `None`, and lookups fall back to a direct presence check via `lookup`.
pub trait PropertySource {
    /// Report whether `key` is an own property, or `None` if the probe is unavailable.
    fn has_own(&self, key: &str) -> Option<bool>;

    /// Fetch the own value stored under `key`, if present.
    fn lookup(&self, key: &str) -> Option<&Value>;
}

impl PropertySource for Record {
    fn has_own(&self, key: &str) -> Option<bool> {
        Some(self.contains_key(key))
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Return the value of `key` if it is an own property of `record`.
#[must_use]
pub fn get_own_property<'a>(record: &'a Record, key: &str) -> Option<&'a Value> {
    get_own_property_from(record, key)
}

/// Own-property lookup over any `PropertySource`.
#[must_use]
pub fn get_own_property_from<'a, S>(source: &'a S, key: &str) -> Option<&'a Value>
where
    S: PropertySource + ?Sized,
{
    match source.has_own(key) {
        Some(true) => source.lookup(key),
        Some(false) => None,
        None => {
            log::debug!("Own-property probe unavailable for '{key}'; using direct lookup");
            source.lookup(key)
        }
    }
}
