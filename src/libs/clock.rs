//! Conversion between second counts and `HH:MM:SS` clock strings.
//!
//! Hours are not wrapped at 24, so long entries stay readable:
//!
//! ```rust
//! use timetrack::libs::clock::{clock_to_seconds, seconds_to_clock};
//!
//! assert_eq!(seconds_to_clock(3_661), "01:01:01");
//! assert_eq!(seconds_to_clock(100 * 3_600), "100:00:00");
//! assert_eq!(clock_to_seconds("01:01:01").unwrap(), 3_661);
//! ```

use crate::libs::error::{TrackerError, TrackerResult};

/// Largest duration that fits the signed integer storage column.
pub const MAX_SECONDS: u64 = i64::MAX as u64;

pub fn seconds_to_clock(seconds: u64) -> String {
    let (mins, secs) = (seconds / 60, seconds % 60);
    let (hours, mins) = (mins / 60, mins % 60);
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Parses `H:M:S` into seconds.
///
/// Each field must be a non-empty run of ASCII digits; minute and second
/// fields above 59 are accepted and simply add up. Totals above
/// [`MAX_SECONDS`] are rejected.
pub fn clock_to_seconds(clock: &str) -> TrackerResult<u64> {
    let fields: Vec<&str> = clock.trim().split(':').collect();
    if fields.len() != 3 {
        return Err(TrackerError::Format(format!("'{}' is not HH:MM:SS", clock)));
    }

    let mut values = [0u64; 3];
    for (slot, field) in values.iter_mut().zip(&fields) {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TrackerError::Format(format!("'{}' has a non-numeric field '{}'", clock, field)));
        }
        *slot = field
            .parse()
            .map_err(|_| TrackerError::Format(format!("'{}' has an out of range field '{}'", clock, field)))?;
    }

    let [hours, mins, secs] = values;
    hours
        .checked_mul(3_600)
        .and_then(|h| h.checked_add(mins.checked_mul(60)?))
        .and_then(|t| t.checked_add(secs))
        .filter(|total| *total <= MAX_SECONDS)
        .ok_or_else(|| TrackerError::Format(format!("'{}' is too large", clock)))
}
