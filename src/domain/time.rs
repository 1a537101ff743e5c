//! Wall-clock time arithmetic for the timetable engine.
//!
//! Times are represented as `chrono::NaiveTime`; all arithmetic wraps modulo
//! 24h, matching the assumption that a teaching day never crosses midnight.

use chrono::{Duration, NaiveTime};

use crate::errors::AppError;

/// Parses `HH:MM` or `HH:MM:SS` into a `NaiveTime`.
pub fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| AppError::validation(format!("invalid time string: {value}")))
}

/// Adds `minutes` to `time`, wrapping modulo 24h. Wrap-around is not expected
/// in valid school-timing inputs and is not treated specially beyond the wrap
/// chrono's `overflowing_add_signed` already performs.
pub fn add_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    let (wrapped, _) = time.overflowing_add_signed(Duration::minutes(minutes));
    wrapped
}

/// Bit *i* of `school_days`/`break.days` selects weekday *i*, `0 = Sunday`.
pub const DEFAULT_SCHOOL_DAYS_MASK: u8 = 0b0111110;

/// Decodes a weekday bitmask into the weekdays it selects. A zero mask falls
/// back to Mon..Fri — this fallback only fires when an input omits the field.
pub fn decode_days(mask: u8) -> Vec<u8> {
    if mask == 0 {
        return vec![1, 2, 3, 4, 5];
    }
    (0..7u8).filter(|day| mask & (1 << day) != 0).collect()
}
