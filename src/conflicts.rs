//! Occupied-interval extraction from existing bookings.
//!
//! Projects the day's appointments for one barber into the `[start, end)`
//! intervals the slot generator must avoid. Intervals are returned in
//! input order; the generator does pairwise overlap checks, so sorting is
//! unnecessary at the tens-of-appointments-per-day scale this serves.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::ExistingAppointment;

/// A booked `[start, end)` interval that candidate slots must not overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupiedInterval {
    /// Booking start (inclusive).
    pub start: NaiveDateTime,
    /// Booking end (exclusive).
    pub end: NaiveDateTime,
}

impl OccupiedInterval {
    /// Creates an occupied interval.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Classic half-open overlap with a candidate `[slot_start, slot_end)`.
    #[inline]
    pub fn overlaps(&self, slot_start: NaiveDateTime, slot_end: NaiveDateTime) -> bool {
        slot_start < self.end && slot_end > self.start
    }
}

/// Builds the occupied set for `barber_id` on `date`.
///
/// Same-day matching compares the start's calendar date, not a 24-hour
/// window, so an appointment at the same wall-clock time on another day
/// never leaks in.
pub fn build_occupied(
    appointments: &[ExistingAppointment],
    barber_id: &str,
    date: NaiveDate,
) -> Vec<OccupiedInterval> {
    appointments
        .iter()
        .filter(|a| a.barber_id == barber_id && a.start_time.date() == date)
        .map(|a| OccupiedInterval::new(a.start_time, a.end_time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn at(d: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        d.and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_filters_by_barber_and_date() {
        let other_day = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        let appointments = vec![
            ExistingAppointment::new("b1", at(date(), 10, 0), at(date(), 10, 30)),
            ExistingAppointment::new("b2", at(date(), 11, 0), at(date(), 11, 30)),
            // Same wall-clock time, different calendar day
            ExistingAppointment::new("b1", at(other_day, 10, 0), at(other_day, 10, 30)),
        ];

        let occupied = build_occupied(&appointments, "b1", date());
        assert_eq!(
            occupied,
            vec![OccupiedInterval::new(at(date(), 10, 0), at(date(), 10, 30))]
        );
    }

    #[test]
    fn test_empty_when_no_bookings() {
        assert!(build_occupied(&[], "b1", date()).is_empty());
    }

    #[test]
    fn test_half_open_overlap() {
        let occ = OccupiedInterval::new(at(date(), 10, 0), at(date(), 10, 30));

        // Touching at either boundary is not an overlap
        assert!(!occ.overlaps(at(date(), 9, 30), at(date(), 10, 0)));
        assert!(!occ.overlaps(at(date(), 10, 30), at(date(), 11, 0)));

        // Any interior intersection is
        assert!(occ.overlaps(at(date(), 9, 45), at(date(), 10, 15)));
        assert!(occ.overlaps(at(date(), 10, 15), at(date(), 10, 45)));
        assert!(occ.overlaps(at(date(), 9, 0), at(date(), 11, 0))); // containment
        assert!(occ.overlaps(at(date(), 10, 10), at(date(), 10, 20))); // contained
    }
}
