//! Operating-hours and work-schedule models.
//!
//! Both tables are weekday-indexed: at most one entry per weekday, and a
//! missing entry means the shop is closed (or the barber does not work)
//! that day. Time-of-day fields carry the wire strings (`"HH:MM"`, or the
//! `"closed"` sentinel for shop hours) and are parsed at resolve time;
//! [`validation`](crate::validation) rejects malformed tables at save time.

use serde::{Deserialize, Serialize};

use super::WeekDay;

/// Sentinel value marking a shop day as fully closed.
pub const CLOSED: &str = "closed";

/// A shop's public operating hours for one weekday.
///
/// If `open` (or `close`) equals `"closed"`, the day is fully unavailable
/// regardless of any barber schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Weekday this entry applies to.
    pub day: WeekDay,
    /// Opening time (`"HH:MM"`) or `"closed"`.
    pub open: String,
    /// Closing time (`"HH:MM"`) or `"closed"`.
    pub close: String,
}

impl DayHours {
    /// Creates an open-day entry.
    pub fn new(day: WeekDay, open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            day,
            open: open.into(),
            close: close.into(),
        }
    }

    /// Creates a closed-day entry.
    pub fn closed(day: WeekDay) -> Self {
        Self {
            day,
            open: CLOSED.to_string(),
            close: CLOSED.to_string(),
        }
    }

    /// Whether this entry marks the day closed.
    ///
    /// Case-insensitive on either field; a half-closed entry (one field a
    /// time, the other `"closed"`) still counts as closed here and is
    /// flagged by validation.
    pub fn is_closed(&self) -> bool {
        self.open.eq_ignore_ascii_case(CLOSED) || self.close.eq_ignore_ascii_case(CLOSED)
    }
}

/// A barber's optional lunch break within one day's shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchBreak {
    /// Break start (`"HH:MM"`).
    pub start: String,
    /// Break end (`"HH:MM"`).
    pub end: String,
}

impl LunchBreak {
    /// Creates a lunch break.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A barber's work schedule for one weekday.
///
/// Owned by the barber entity and mutated only through its schedule
/// editor; a weekday with no entry means the barber does not work that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarberDaySchedule {
    /// Weekday this entry applies to.
    pub day: WeekDay,
    /// Shift start (`"HH:MM"`).
    pub start: String,
    /// Shift end (`"HH:MM"`).
    pub end: String,
    /// Optional lunch break; no slots are offered inside it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_time: Option<LunchBreak>,
}

impl BarberDaySchedule {
    /// Creates a schedule entry without a lunch break.
    pub fn new(day: WeekDay, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day,
            start: start.into(),
            end: end.into(),
            lunch_time: None,
        }
    }

    /// Sets the lunch break.
    pub fn with_lunch(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.lunch_time = Some(LunchBreak::new(start, end));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_detection() {
        assert!(DayHours::closed(WeekDay::Sunday).is_closed());
        assert!(!DayHours::new(WeekDay::Monday, "09:00", "18:00").is_closed());

        // Case-insensitive, and half-closed still counts
        let mixed = DayHours::new(WeekDay::Monday, "Closed", "18:00");
        assert!(mixed.is_closed());
    }

    #[test]
    fn test_schedule_builder() {
        let entry = BarberDaySchedule::new(WeekDay::Tuesday, "09:00", "17:00")
            .with_lunch("12:00", "13:00");
        assert_eq!(entry.lunch_time, Some(LunchBreak::new("12:00", "13:00")));
    }

    #[test]
    fn test_wire_shape() {
        // Matches the REST payload shape the schedule editor produces.
        let json = r#"{"day":"monday","start":"08:30","end":"17:00","lunch_time":{"start":"12:00","end":"13:00"}}"#;
        let entry: BarberDaySchedule = serde_json::from_str(json).unwrap();
        assert_eq!(entry.day, WeekDay::Monday);
        assert_eq!(entry.lunch_time.as_ref().unwrap().end, "13:00");

        let no_lunch: BarberDaySchedule =
            serde_json::from_str(r#"{"day":"friday","start":"10:00","end":"16:00"}"#).unwrap();
        assert!(no_lunch.lunch_time.is_none());
    }
}
