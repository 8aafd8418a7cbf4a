//! Time source

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, SecondsFormat};

/// Wall clock in epoch milliseconds
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> f64;
}

/// Clock backed by `SystemTime`
///
/// Not usable on `wasm32-unknown-unknown`; the browser build uses
/// `Date.now()` instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

/// Format epoch milliseconds as ISO-8601 UTC with milliseconds
///
/// Matches `Date.prototype.toISOString`, e.g. `2025-01-05T10:00:00.000Z`.
pub fn iso_timestamp(ms: f64) -> String {
    DateTime::from_timestamp_millis(ms as i64)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}
