//! Availability engine façade.
//!
//! Single entry point composing window resolution, conflict extraction,
//! and slot enumeration. Pure and synchronous: no I/O, no locks, no
//! hidden state, safe to call concurrently since every call takes a fresh
//! [`SlotRequest`] and returns a fresh result.
//!
//! Callers fetch shop hours, the barber schedule, and the day's
//! appointments before invoking, and re-fetch (never patch in place)
//! after any booking mutation. [`verify_slot_available`] is the
//! authoritative re-check a server runs at appointment-creation time to
//! close the window where two clients observed the same free slot.

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

use crate::conflicts::build_occupied;
use crate::error::SlotError;
use crate::models::{BarberDaySchedule, DayHours, ExistingAppointment};
use crate::resolver::{resolve_window, DayWindow};
use crate::slots::SlotIter;
use crate::time::format_slot;

/// Step granularity used when a request does not override it.
///
/// One named constant for every call site; the original system scattered
/// 10- and 15-minute literals across its pages with no principled reason.
pub const DEFAULT_STEP_MINUTES: u32 = 15;

/// Input for one availability query.
///
/// Computed per (shop, barber, date, service-set) tuple; no persisted
/// identity, no lifecycle beyond the single call.
///
/// # Example
///
/// ```
/// use bookable::engine::{compute_available_slots, SlotRequest};
/// use bookable::models::{BarberDaySchedule, DayHours, WeekDay};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(); // a Monday
/// let request = SlotRequest::new(date, "b1", 30)
///     .with_shop_hours(vec![DayHours::new(WeekDay::Monday, "09:00", "18:00")])
///     .with_barber_schedule(vec![BarberDaySchedule::new(WeekDay::Monday, "09:00", "17:00")])
///     .with_now(date.and_hms_opt(8, 0, 0).unwrap());
///
/// let slots = compute_available_slots(&request).unwrap();
/// assert_eq!(slots.len(), 31); // 09:00 through 16:30 every 15 minutes
/// ```
#[derive(Debug, Clone)]
pub struct SlotRequest {
    /// Calendar date to compute availability for.
    pub date: NaiveDate,
    /// Barber whose schedule and bookings apply.
    pub barber_id: String,
    /// Shop operating hours, weekday-indexed.
    pub shop_hours: Vec<DayHours>,
    /// Barber work schedule, weekday-indexed.
    pub barber_schedule: Vec<BarberDaySchedule>,
    /// Existing bookings; only this barber's same-day entries matter.
    pub existing_appointments: Vec<ExistingAppointment>,
    /// Requested service duration (sum of selected services), minutes.
    pub duration_minutes: u32,
    /// Candidate spacing, minutes.
    pub step_minutes: u32,
    /// Current time, for the same-day past-slot cutoff.
    pub now: NaiveDateTime,
}

impl SlotRequest {
    /// Creates a request with the default step and `now` at the start of
    /// `date` (no cutoff effect until overridden with [`with_now`](Self::with_now)).
    pub fn new(date: NaiveDate, barber_id: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            date,
            barber_id: barber_id.into(),
            shop_hours: Vec::new(),
            barber_schedule: Vec::new(),
            existing_appointments: Vec::new(),
            duration_minutes,
            step_minutes: DEFAULT_STEP_MINUTES,
            now: date.and_time(chrono::NaiveTime::MIN),
        }
    }

    /// Sets the shop operating hours table.
    pub fn with_shop_hours(mut self, hours: Vec<DayHours>) -> Self {
        self.shop_hours = hours;
        self
    }

    /// Sets the barber schedule table.
    pub fn with_barber_schedule(mut self, schedule: Vec<BarberDaySchedule>) -> Self {
        self.barber_schedule = schedule;
        self
    }

    /// Sets the existing bookings.
    pub fn with_appointments(mut self, appointments: Vec<ExistingAppointment>) -> Self {
        self.existing_appointments = appointments;
        self
    }

    /// Overrides the step granularity.
    pub fn with_step(mut self, step_minutes: u32) -> Self {
        self.step_minutes = step_minutes;
        self
    }

    /// Sets the current time used for the today cutoff.
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    fn validate(&self) -> Result<(), SlotError> {
        if self.duration_minutes == 0 {
            return Err(SlotError::InvalidRequest(
                "duration_minutes must be positive".to_string(),
            ));
        }
        if self.step_minutes == 0 {
            return Err(SlotError::InvalidRequest(
                "step_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Computes every bookable start time for the request's date, ascending.
///
/// A closed day (shop closed, barber off, or non-overlapping windows) is
/// the empty `Ok` result; only malformed time text or a non-positive
/// duration/step is an error.
pub fn compute_available_slots(request: &SlotRequest) -> Result<Vec<NaiveDateTime>, SlotError> {
    request.validate()?;

    let window = match resolve_window(request.date, &request.shop_hours, &request.barber_schedule)?
    {
        DayWindow::Closed => {
            debug!(
                "no availability for barber {} on {}: day is closed",
                request.barber_id, request.date
            );
            return Ok(Vec::new());
        }
        DayWindow::Open(window) => window,
    };

    let occupied = build_occupied(
        &request.existing_appointments,
        &request.barber_id,
        request.date,
    );

    let slots: Vec<NaiveDateTime> = SlotIter::new(
        &window,
        &occupied,
        request.duration_minutes,
        request.step_minutes,
        request.now,
        request.date,
    )
    .collect();

    debug!(
        "{} slot(s) for barber {} on {} ({} booking(s) excluded)",
        slots.len(),
        request.barber_id,
        request.date,
        occupied.len()
    );
    Ok(slots)
}

/// Like [`compute_available_slots`], returning 24-hour `"HH:MM"` labels
/// ready to render as selectable buttons.
pub fn available_slot_labels(request: &SlotRequest) -> Result<Vec<String>, SlotError> {
    Ok(compute_available_slots(request)?
        .iter()
        .map(|s| format_slot(*s))
        .collect())
}

/// Authoritative booking-time re-check.
///
/// Run server-side against freshly fetched data before persisting an
/// appointment: rejects with [`SlotError::SlotNoLongerAvailable`] when
/// `start` is not in the currently available set, so two clients that
/// observed the same free slot cannot both book it.
pub fn verify_slot_available(request: &SlotRequest, start: NaiveDateTime) -> Result<(), SlotError> {
    request.validate()?;

    let window = match resolve_window(request.date, &request.shop_hours, &request.barber_schedule)?
    {
        DayWindow::Closed => return Err(SlotError::SlotNoLongerAvailable),
        DayWindow::Open(window) => window,
    };
    let occupied = build_occupied(
        &request.existing_appointments,
        &request.barber_id,
        request.date,
    );

    let mut candidates = SlotIter::new(
        &window,
        &occupied,
        request.duration_minutes,
        request.step_minutes,
        request.now,
        request.date,
    );
    if candidates.any(|s| s == start) {
        Ok(())
    } else {
        Err(SlotError::SlotNoLongerAvailable)
    }
}
