//! Save-time integrity checks for schedule tables.
//!
//! Malformed schedule data (swapped open/close, a lunch break outside the
//! shift, duplicate weekday rows) would otherwise silently produce zero
//! slots at query time. Settings UIs run these checks when an admin or
//! barber saves a schedule, so the engine never sees bad tables. Detects:
//! - Duplicate weekday entries
//! - Malformed `"HH:MM"` text
//! - Inverted windows (`open >= close`, `start >= end`)
//! - Half-closed shop days (one field `"closed"`, the other a time)
//! - Inverted lunch breaks or breaks outside the work window

use std::collections::HashSet;

use crate::models::{BarberDaySchedule, DayHours, WeekDay};
use crate::time::parse_time;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A weekday appears more than once in one table.
    DuplicateWeekday,
    /// A time field is not strict `"HH:MM"`.
    MalformedTime,
    /// Open/close (or start/end) are inverted or equal.
    InvertedHours,
    /// One of open/close is `"closed"` but the other is a time.
    HalfClosedDay,
    /// Lunch start is not before lunch end.
    InvertedLunch,
    /// Lunch break falls outside the day's work window.
    LunchOutsideShift,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a shop's operating-hours table.
///
/// Checks:
/// 1. At most one entry per weekday
/// 2. Fully-closed days are consistent (both fields `"closed"`)
/// 3. Open days carry well-formed `"HH:MM"` text
/// 4. Open days satisfy `open < close`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_shop_hours(hours: &[DayHours]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    // Any date works as parse anchor; only the wall-clock order matters.
    let anchor = anchor_date();

    for entry in hours {
        if !seen.insert(entry.day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateWeekday,
                format!("Duplicate shop hours for {:?}", entry.day),
            ));
        }

        let open_closed = entry.open.eq_ignore_ascii_case(crate::models::CLOSED);
        let close_closed = entry.close.eq_ignore_ascii_case(crate::models::CLOSED);
        if open_closed != close_closed {
            errors.push(ValidationError::new(
                ValidationErrorKind::HalfClosedDay,
                format!(
                    "{:?} mixes 'closed' with a time ('{}'/'{}')",
                    entry.day, entry.open, entry.close
                ),
            ));
            continue;
        }
        if open_closed {
            continue;
        }

        match (
            parse_time(&entry.open, anchor),
            parse_time(&entry.close, anchor),
        ) {
            (Ok(open), Ok(close)) => {
                if open >= close {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvertedHours,
                        format!(
                            "{:?} opens at '{}' but closes at '{}'",
                            entry.day, entry.open, entry.close
                        ),
                    ));
                }
            }
            _ => errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!(
                    "{:?} has malformed hours ('{}'/'{}')",
                    entry.day, entry.open, entry.close
                ),
            )),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a barber's work-schedule table.
///
/// Checks:
/// 1. At most one entry per weekday
/// 2. Well-formed `"HH:MM"` text, including the lunch break
/// 3. `start < end` per entry
/// 4. Lunch break, when present, satisfies `start < end` and lies within
///    the day's work window
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_barber_schedule(schedule: &[BarberDaySchedule]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<WeekDay> = HashSet::new();
    let anchor = anchor_date();

    for entry in schedule {
        if !seen.insert(entry.day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateWeekday,
                format!("Duplicate schedule entry for {:?}", entry.day),
            ));
        }

        let window = match (
            parse_time(&entry.start, anchor),
            parse_time(&entry.end, anchor),
        ) {
            (Ok(start), Ok(end)) => {
                if start >= end {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvertedHours,
                        format!(
                            "{:?} starts at '{}' but ends at '{}'",
                            entry.day, entry.start, entry.end
                        ),
                    ));
                    None
                } else {
                    Some((start, end))
                }
            }
            _ => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedTime,
                    format!(
                        "{:?} has malformed shift times ('{}'/'{}')",
                        entry.day, entry.start, entry.end
                    ),
                ));
                None
            }
        };

        let Some(lunch) = &entry.lunch_time else {
            continue;
        };
        match (parse_time(&lunch.start, anchor), parse_time(&lunch.end, anchor)) {
            (Ok(ls), Ok(le)) => {
                if ls >= le {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvertedLunch,
                        format!(
                            "{:?} lunch starts at '{}' but ends at '{}'",
                            entry.day, lunch.start, lunch.end
                        ),
                    ));
                } else if let Some((start, end)) = window {
                    if ls < start || le > end {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::LunchOutsideShift,
                            format!(
                                "{:?} lunch '{}'-'{}' falls outside shift '{}'-'{}'",
                                entry.day, lunch.start, lunch.end, entry.start, entry.end
                            ),
                        ));
                    }
                }
            }
            _ => errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!(
                    "{:?} has malformed lunch times ('{}'/'{}')",
                    entry.day, lunch.start, lunch.end
                ),
            )),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn anchor_date() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}
