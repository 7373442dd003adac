//! Candidate slot enumeration.
//!
//! Walks the effective window from open to close in fixed steps, dropping
//! candidates that are already in the past (when the date is today), that
//! intersect the lunch exclusion, or that overlap an existing booking.
//! Survivors come out in strictly increasing order, so no sort follows.
//!
//! # Lunch check
//! The lunch filter is deliberately conservative, in three parts: the
//! slot start falls inside `[lunch.start, lunch.end)`, OR the slot's last
//! occupied minute does, OR the slot fully straddles the break. Partial
//! overlap at either edge is rejected as well as full containment of the
//! break inside a long service slot.

use chrono::{NaiveDate, NaiveDateTime};

use crate::conflicts::OccupiedInterval;
use crate::resolver::EffectiveWindow;
use crate::time::{add_minutes, is_within};

/// Lazy iterator over admissible slot start times.
///
/// Finite and restartable by reconstruction; collect it, or stop at the
/// first survivor when only existence matters.
#[derive(Debug, Clone)]
pub struct SlotIter<'a> {
    current: NaiveDateTime,
    close: NaiveDateTime,
    lunch: Option<(NaiveDateTime, NaiveDateTime)>,
    occupied: &'a [OccupiedInterval],
    duration_min: i64,
    step_min: i64,
    /// `Some(now)` only when the requested date is today.
    cutoff: Option<NaiveDateTime>,
}

impl<'a> SlotIter<'a> {
    /// Creates a slot iterator over `window` for `date`.
    ///
    /// Callers guarantee positive duration and step; the façade rejects
    /// anything else before construction.
    pub fn new(
        window: &EffectiveWindow,
        occupied: &'a [OccupiedInterval],
        duration_minutes: u32,
        step_minutes: u32,
        now: NaiveDateTime,
        date: NaiveDate,
    ) -> Self {
        Self {
            current: window.open,
            close: window.close,
            lunch: window.lunch,
            occupied,
            duration_min: i64::from(duration_minutes),
            step_min: i64::from(step_minutes),
            cutoff: (now.date() == date).then_some(now),
        }
    }

    fn conflicts_with_lunch(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        let Some((lunch_start, lunch_end)) = self.lunch else {
            return false;
        };
        is_within(start, lunch_start, lunch_end)
            || is_within(add_minutes(end, -1), lunch_start, lunch_end)
            || (start < lunch_start && end > lunch_end)
    }
}

impl Iterator for SlotIter<'_> {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        loop {
            let start = self.current;
            let end = add_minutes(start, self.duration_min);
            if end > self.close {
                return None;
            }
            self.current = add_minutes(start, self.step_min);

            // Skip, don't stop: later slots today may still be valid.
            if self.cutoff.is_some_and(|now| start < now) {
                continue;
            }
            if self.conflicts_with_lunch(start, end) {
                continue;
            }
            if self.occupied.iter().any(|occ| occ.overlaps(start, end)) {
                continue;
            }
            return Some(start);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        date().and_hms_opt(h, m, 0).unwrap()
    }

    fn long_ago() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn window(open: NaiveDateTime, close: NaiveDateTime) -> EffectiveWindow {
        EffectiveWindow {
            open,
            close,
            lunch: None,
        }
    }

    #[test]
    fn test_plain_window() {
        let w = window(at(9, 0), at(17, 0));
        let slots: Vec<_> = SlotIter::new(&w, &[], 30, 15, long_ago(), date()).collect();

        assert_eq!(slots.first(), Some(&at(9, 0)));
        assert_eq!(slots.last(), Some(&at(16, 30)));
        assert_eq!(slots.len(), 31);
    }

    #[test]
    fn test_slots_fit_within_window() {
        let w = window(at(9, 0), at(17, 0));
        for s in SlotIter::new(&w, &[], 45, 15, long_ago(), date()) {
            assert!(s >= w.open);
            assert!(add_minutes(s, 45) <= w.close);
        }
    }

    #[test]
    fn test_strictly_increasing() {
        let w = window(at(9, 0), at(18, 0));
        let occupied = vec![OccupiedInterval::new(at(11, 0), at(12, 0))];
        let slots: Vec<_> = SlotIter::new(&w, &occupied, 30, 10, long_ago(), date()).collect();
        assert!(slots.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn test_lunch_edges_and_straddle() {
        let w = EffectiveWindow {
            open: at(9, 0),
            close: at(17, 0),
            lunch: Some((at(12, 0), at(13, 0))),
        };
        let slots: Vec<_> = SlotIter::new(&w, &[], 60, 15, long_ago(), date()).collect();

        assert!(!slots.contains(&at(11, 30))); // straddles into lunch
        assert!(!slots.contains(&at(11, 15))); // ends 12:15, spills in
        assert!(!slots.contains(&at(12, 30))); // starts inside lunch
        assert!(slots.contains(&at(13, 0))); // first slot after lunch
        // Ends exactly at 12:00: last occupied minute is 11:59, no conflict
        assert!(slots.contains(&at(11, 0)));
    }

    #[test]
    fn test_slot_ending_at_lunch_start_is_kept() {
        let w = EffectiveWindow {
            open: at(9, 0),
            close: at(17, 0),
            lunch: Some((at(12, 0), at(13, 0))),
        };
        let slots: Vec<_> = SlotIter::new(&w, &[], 30, 15, long_ago(), date()).collect();
        // [11:30, 12:00) touches the break without entering it
        assert!(slots.contains(&at(11, 30)));
        assert!(!slots.contains(&at(11, 45)));
    }

    #[test]
    fn test_long_slot_containing_lunch_rejected() {
        let w = EffectiveWindow {
            open: at(9, 0),
            close: at(17, 0),
            lunch: Some((at(12, 0), at(12, 30))),
        };
        let slots: Vec<_> = SlotIter::new(&w, &[], 120, 15, long_ago(), date()).collect();
        // [11:00, 13:00) fully contains the break
        assert!(!slots.contains(&at(11, 0)));
    }

    #[test]
    fn test_booking_overlap() {
        let w = window(at(9, 0), at(17, 0));
        let occupied = vec![OccupiedInterval::new(at(10, 0), at(10, 30))];
        let slots: Vec<_> = SlotIter::new(&w, &occupied, 30, 15, long_ago(), date()).collect();

        assert!(!slots.contains(&at(9, 45)));
        assert!(!slots.contains(&at(10, 0)));
        assert!(!slots.contains(&at(10, 15)));
        assert!(slots.contains(&at(9, 30)));
        assert!(slots.contains(&at(10, 30)));
    }

    #[test]
    fn test_no_slot_overlaps_any_booking() {
        let w = window(at(9, 0), at(18, 0));
        let occupied = vec![
            OccupiedInterval::new(at(10, 0), at(10, 40)),
            OccupiedInterval::new(at(14, 15), at(15, 0)),
        ];
        for s in SlotIter::new(&w, &occupied, 25, 10, long_ago(), date()) {
            let end = add_minutes(s, 25);
            assert!(occupied.iter().all(|o| !o.overlaps(s, end)));
        }
    }

    #[test]
    fn test_today_cutoff_skips_not_breaks() {
        let w = window(at(9, 0), at(18, 0));
        let now = date().and_hms_opt(14, 32, 0).unwrap();
        let slots: Vec<_> = SlotIter::new(&w, &[], 30, 15, now, date()).collect();

        // 14:30 < 14:32 is filtered strictly; 14:45 is the first survivor.
        assert_eq!(slots.first(), Some(&at(14, 45)));
        assert!(slots.iter().all(|s| *s >= now));
        assert!(slots.contains(&at(17, 30)));
    }

    #[test]
    fn test_cutoff_ignored_for_other_dates() {
        let w = window(at(9, 0), at(18, 0));
        let tomorrow_request_now = date()
            .pred_opt()
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let slots: Vec<_> = SlotIter::new(&w, &[], 30, 15, tomorrow_request_now, date()).collect();
        assert_eq!(slots.first(), Some(&at(9, 0)));
    }

    #[test]
    fn test_duration_longer_than_window_yields_nothing() {
        let w = window(at(9, 0), at(9, 45));
        let mut iter = SlotIter::new(&w, &[], 60, 15, long_ago(), date());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_restartable_by_reconstruction() {
        let w = window(at(9, 0), at(12, 0));
        let occupied = vec![OccupiedInterval::new(at(9, 30), at(10, 0))];
        let a: Vec<_> = SlotIter::new(&w, &occupied, 30, 15, long_ago(), date()).collect();
        let b: Vec<_> = SlotIter::new(&w, &occupied, 30, 15, long_ago(), date()).collect();
        assert_eq!(a, b);
    }
}
