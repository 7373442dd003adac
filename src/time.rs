//! Wall-clock time utilities.
//!
//! Parses `"HH:MM"` schedule strings into instants anchored to a calendar
//! date, plus the small arithmetic and interval helpers used throughout.
//!
//! # Time Model
//! All instants are naive local datetimes. The booking system is
//! single-timezone by construction, so no offset conversion happens here.
//! Callers only ever stay within one business day, so minute arithmetic
//! never needs calendar-overflow special-casing.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::SlotError;

/// Parses a strict `"HH:MM"` string into an instant on `anchor_date`.
///
/// The shape is exactly two digits, a colon, two digits, with hour in
/// `00..=23` and minute in `00..=59`. Anything else fails with
/// [`SlotError::InvalidTimeFormat`] carrying the offending text.
///
/// # Examples
///
/// ```
/// use bookable::time::parse_time;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let t = parse_time("09:30", date).unwrap();
/// assert_eq!(t.to_string(), "2025-06-02 09:30:00");
///
/// assert!(parse_time("9:30", date).is_err());
/// assert!(parse_time("24:00", date).is_err());
/// ```
pub fn parse_time(text: &str, anchor_date: NaiveDate) -> Result<NaiveDateTime, SlotError> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();
    if !well_formed {
        return Err(SlotError::InvalidTimeFormat(text.to_string()));
    }

    let hour: u32 = text[0..2].parse().unwrap_or(24);
    let minute: u32 = text[3..5].parse().unwrap_or(60);
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| SlotError::InvalidTimeFormat(text.to_string()))?;

    Ok(anchor_date.and_time(time))
}

/// Adds (or with a negative argument, subtracts) whole minutes.
#[inline]
pub fn add_minutes(instant: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    instant + Duration::minutes(minutes)
}

/// Half-open interval containment: `start <= instant < end`.
#[inline]
pub fn is_within(instant: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    instant >= start && instant < end
}

/// Formats an instant as the 24-hour `"HH:MM"` display label callers
/// render as selectable buttons.
pub fn format_slot(instant: NaiveDateTime) -> String {
    instant.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        let t = parse_time("00:00", date()).unwrap();
        assert_eq!(t, date().and_hms_opt(0, 0, 0).unwrap());

        let t = parse_time("23:59", date()).unwrap();
        assert_eq!(t, date().and_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "9:30", "09:3", "0930", "09-30", "ab:cd", "09:300", " 9:30"] {
            let err = parse_time(bad, date()).unwrap_err();
            assert_eq!(err, SlotError::InvalidTimeFormat(bad.to_string()));
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_time("24:00", date()).is_err());
        assert!(parse_time("12:60", date()).is_err());
    }

    #[test]
    fn test_add_minutes() {
        let t = parse_time("10:00", date()).unwrap();
        assert_eq!(add_minutes(t, 45), parse_time("10:45", date()).unwrap());
        assert_eq!(add_minutes(t, -15), parse_time("09:45", date()).unwrap());
    }

    #[test]
    fn test_is_within_half_open() {
        let start = parse_time("12:00", date()).unwrap();
        let end = parse_time("13:00", date()).unwrap();

        assert!(is_within(start, start, end)); // start inclusive
        assert!(is_within(parse_time("12:59", date()).unwrap(), start, end));
        assert!(!is_within(end, start, end)); // end exclusive
        assert!(!is_within(parse_time("11:59", date()).unwrap(), start, end));
    }

    #[test]
    fn test_format_slot() {
        let t = parse_time("08:05", date()).unwrap();
        assert_eq!(format_slot(t), "08:05");
    }
}
