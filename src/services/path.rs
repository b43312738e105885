//! Dotted path resolution and record flattening.
//!
//! The two directions deliberately disagree on what counts as a result:
//!
//! - `resolve_path` stops with `None` as soon as it has to descend through a
//!   null, a callable, or any other non-record, and it never hands back a
//!   nested record.
//! - `flatten` descends into every nested record and emits everything else
//!   (nulls and callables included) under its full path.
//!
//! Every key produced by `flatten` resolves, in the same record, to the value
//! stored under it, provided no source key contains the separator.

use crate::models::{FlatMap, Record, Value};
use crate::services::property::get_own_property;

/// Options shared by path resolution and flattening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathOptions {
    /// Character separating path segments.
    pub separator: char,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self { separator: '.' }
    }
}

/// Resolve a `.`-separated path to a leaf value.
#[must_use]
pub fn resolve_path<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
    resolve_path_with(record, path, &PathOptions::default())
}

/// Resolve `path` segment by segment, returning the leaf it ends on.
///
/// Returns `None` when a key is missing, when a segment would need to descend
/// through a non-record, or when the path ends on a nested record.
#[must_use]
pub fn resolve_path_with<'a>(
    record: &'a Record,
    path: &str,
    opts: &PathOptions,
) -> Option<&'a Value> {
    let mut current = record;
    let mut segments = path.split(opts.separator).peekable();

    while let Some(segment) = segments.next() {
        let Some(value) = get_own_property(current, segment) else {
            log::trace!("Path '{path}': missing key '{segment}'");
            return None;
        };

        let is_last = segments.peek().is_none();
        match value {
            Value::Record(_) if is_last => {
                log::trace!("Path '{path}': ends on a nested record");
                return None;
            }
            Value::Record(child) => current = child,
            leaf if is_last => return Some(leaf),
            _ => {
                log::trace!("Path '{path}': '{segment}' is not a record, cannot descend");
                return None;
            }
        }
    }

    None
}

/// Flatten nested records into a single-level map keyed by dotted paths.
#[must_use]
pub fn flatten(record: &Record) -> FlatMap {
    flatten_with(record, &PathOptions::default())
}

/// Flatten using a custom separator.
///
/// Output order follows a depth-first walk of the source record. If two
/// source paths collapse onto the same key, the one visited last wins.
#[must_use]
pub fn flatten_with(record: &Record, opts: &PathOptions) -> FlatMap {
    let mut flat = FlatMap::new();
    flatten_into(record, None, opts.separator, &mut flat);
    flat
}

fn flatten_into(record: &Record, prefix: Option<&str>, separator: char, out: &mut FlatMap) {
    for (key, value) in record.iter() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}{separator}{key}"),
            None => key.to_string(),
        };

        match value {
            Value::Record(child) => flatten_into(child, Some(&path), separator, out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

/// Resolve several paths at once, keeping only those that resolve.
///
/// The result is keyed by the requested path, in request order.
#[must_use]
pub fn document_properties<I, P>(record: &Record, paths: I) -> FlatMap
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    paths
        .into_iter()
        .filter_map(|path| {
            let path = path.as_ref();
            resolve_path(record, path).map(|value| (path.to_string(), value.clone()))
        })
        .collect()
}
