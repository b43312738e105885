//! Core services for formatting, property lookup, path traversal, and set algebra

pub mod format;
pub mod path;
pub mod property;
pub mod sets;
