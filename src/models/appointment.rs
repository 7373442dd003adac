//! Read-only appointment projection used for conflict detection.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An existing appointment, reduced to what conflict detection needs.
///
/// The appointment entity is owned and lifecycle-managed elsewhere
/// (created, edited, and cancelled by the booking pages); the engine only
/// ever reads this projection and never mutates appointment state.
///
/// Timestamps are naive local datetimes — the whole system is
/// single-timezone by construction, so no offset handling is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingAppointment {
    /// Barber the appointment is booked with.
    pub barber_id: String,
    /// Appointment start (inclusive).
    pub start_time: NaiveDateTime,
    /// Appointment end (exclusive).
    pub end_time: NaiveDateTime,
}

impl ExistingAppointment {
    /// Creates an appointment projection.
    pub fn new(barber_id: impl Into<String>, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            barber_id: barber_id.into(),
            start_time,
            end_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_8601_wire_shape() {
        let json = r#"{"barber_id":"b1","start_time":"2025-06-02T10:00:00","end_time":"2025-06-02T10:30:00"}"#;
        let appt: ExistingAppointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.barber_id, "b1");
        assert_eq!(appt.end_time.time(), chrono::NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    }
}
