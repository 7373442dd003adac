//! Effective-window resolution for one calendar date.
//!
//! Intersects the shop's operating hours with the barber's work schedule
//! for the date's weekday and anchors the result (plus any lunch break)
//! to concrete instants on that date.
//!
//! # Precedence
//! The tighter window always wins: a barber cannot serve outside shop
//! hours, and the shop should not offer slots the assigned barber cannot
//! honor.

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

use crate::error::SlotError;
use crate::models::{BarberDaySchedule, DayHours, WeekDay};
use crate::time::parse_time;

/// The usable booking window for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveWindow {
    /// Earliest admissible slot start.
    pub open: NaiveDateTime,
    /// Latest admissible slot end.
    pub close: NaiveDateTime,
    /// Lunch exclusion as `[start, end)`, when the barber takes one.
    pub lunch: Option<(NaiveDateTime, NaiveDateTime)>,
}

/// Outcome of window resolution.
///
/// `Closed` is a normal result, not an error: the shop is closed, the
/// barber does not work that day, or their windows do not overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayWindow {
    /// No slots are possible on this date.
    Closed,
    /// Slots may exist within this window.
    Open(EffectiveWindow),
}

/// Resolves the effective open/close window for `date`.
///
/// 1. Missing shop entry, or a `"closed"` open/close → [`DayWindow::Closed`].
/// 2. Missing barber entry → [`DayWindow::Closed`].
/// 3. `open = max(shop.open, barber.start)`,
///    `close = min(shop.close, barber.end)` — the intersection.
/// 4. An empty intersection (`open >= close`) → [`DayWindow::Closed`];
///    this legitimately occurs when the two windows do not overlap at all.
///
/// Duplicate weekday entries are tolerated by taking the first match;
/// [`validation`](crate::validation) rejects them at save time.
///
/// Malformed `"HH:MM"` text anywhere is an upstream data defect and
/// propagates as [`SlotError::InvalidTimeFormat`].
pub fn resolve_window(
    date: NaiveDate,
    shop_hours: &[DayHours],
    barber_schedule: &[BarberDaySchedule],
) -> Result<DayWindow, SlotError> {
    let weekday = WeekDay::from_date(date);

    let Some(shop) = shop_hours.iter().find(|h| h.day == weekday) else {
        debug!("no shop hours for {weekday:?}, treating as closed");
        return Ok(DayWindow::Closed);
    };
    if shop.is_closed() {
        return Ok(DayWindow::Closed);
    }

    let Some(barber) = barber_schedule.iter().find(|s| s.day == weekday) else {
        debug!("barber has no schedule entry for {weekday:?}");
        return Ok(DayWindow::Closed);
    };

    let shop_open = parse_time(&shop.open, date)?;
    let shop_close = parse_time(&shop.close, date)?;
    let barber_start = parse_time(&barber.start, date)?;
    let barber_end = parse_time(&barber.end, date)?;

    let open = shop_open.max(barber_start);
    let close = shop_close.min(barber_end);
    if open >= close {
        debug!("shop and barber windows do not overlap on {date}");
        return Ok(DayWindow::Closed);
    }

    let lunch = match &barber.lunch_time {
        Some(lb) => Some((parse_time(&lb.start, date)?, parse_time(&lb.end, date)?)),
        None => None,
    };

    Ok(DayWindow::Open(EffectiveWindow { open, close, lunch }))
}
