//! Weekday tag used as the join key between shop hours and staff schedules.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Day of the week, Sunday = 0 through Saturday = 6.
///
/// Serialized as the lowercase English day name, matching the
/// weekday-name strings the schedule payloads carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekDay {
    /// All seven days in index order.
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Sunday,
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
    ];

    /// Index with Sunday = 0.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Day for a given index (Sunday = 0). `None` if out of range.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Weekday of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        // num_days_from_sunday is 0..=6, always in range
        Self::ALL[date.weekday().num_days_from_sunday() as usize]
    }
}
