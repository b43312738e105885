//! Human-readable formatting for byte counts and nanosecond durations

use std::time::Duration;

/// Binary tiers, each 1024 times the previous one.
const BYTE_UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Time tiers as (nanoseconds per unit, suffix). Seconds is the top tier.
const TIME_UNITS: [(u128, &str); 4] = [
    (1, "ns"),
    (1_000, "μs"),
    (1_000_000, "ms"),
    (1_000_000_000, "s"),
];

/// Options for byte formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteFormatOptions {
    /// Maximum number of decimal places kept after scaling.
    /// Trailing zeros are always dropped.
    pub decimals: usize,
}

impl Default for ByteFormatOptions {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

/// Format a byte count with two decimal places, e.g. `1536 -> "1.5 KB"`.
#[must_use]
pub fn format_bytes(bytes: u128) -> String {
    format_bytes_with(bytes, &ByteFormatOptions::default())
}

/// Format a byte count using base-1024 tiers.
///
/// Values past the largest tier stay in `YB` rather than overflowing the table.
#[must_use]
pub fn format_bytes_with(bytes: u128, opts: &ByteFormatOptions) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let tier = byte_tier(bytes);
    let scaled = bytes as f64 / 1024u128.pow(tier) as f64;

    format!(
        "{} {}",
        trim_fixed(scaled, opts.decimals),
        BYTE_UNITS[tier as usize]
    )
}

/// Format a nanosecond count in the largest tier it reaches.
///
/// Division truncates, so `1_500 -> "1μs"`. Nothing rolls over past
/// seconds: `1_000_000_000_000 -> "1000s"`.
#[must_use]
pub fn format_nanoseconds(nanos: u128) -> String {
    let (per_unit, suffix) = TIME_UNITS
        .iter()
        .rev()
        .find(|(per_unit, _)| nanos >= *per_unit)
        .copied()
        .unwrap_or(TIME_UNITS[0]);

    format!("{}{suffix}", nanos / per_unit)
}

/// Format a `Duration` through its exact nanosecond count.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    format_nanoseconds(duration.as_nanos())
}

/// floor(log1024(bytes)), clamped to the last unit. `bytes` must be non-zero.
fn byte_tier(bytes: u128) -> u32 {
    let log2 = 127 - bytes.leading_zeros();
    (log2 / 10).min(BYTE_UNITS.len() as u32 - 1)
}

/// Fixed-point rendering with trailing zeros (and a bare point) removed.
///
/// Exact ties round half up (`1.125 -> "1.13"`); `{:.N}` alone would round
/// them half to even.
fn trim_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let rounded = (value * factor + 0.5).floor() / factor;
    let fixed = format!("{rounded:.decimals$}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
