//! Appointment availability engine.
//!
//! Computes the bookable start times for one calendar day from a shop's
//! weekday operating hours, a staff member's work schedule (with optional
//! lunch break), the requested service duration, and the day's existing
//! bookings. Pure and deterministic: no I/O, no hidden state, safe to
//! call concurrently with fresh inputs per call.
//!
//! # Modules
//!
//! - **`models`**: Input value objects — `WeekDay`, `DayHours`,
//!   `BarberDaySchedule`, `LunchBreak`, `ExistingAppointment`
//! - **`time`**: Strict `"HH:MM"` parsing, minute arithmetic, half-open
//!   interval containment
//! - **`resolver`**: Intersection of shop and staff windows for a date
//! - **`conflicts`**: Occupied-interval extraction from bookings
//! - **`slots`**: Lazy candidate enumeration with lunch, booking, and
//!   past-time filters
//! - **`engine`**: The façade every call site imports —
//!   [`compute_available_slots`], display labels, booking-time re-check
//! - **`validation`**: Save-time integrity checks for schedule tables
//!
//! # Example
//!
//! ```
//! use bookable::{compute_available_slots, SlotRequest};
//! use bookable::models::{BarberDaySchedule, DayHours, WeekDay};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(); // a Monday
//! let request = SlotRequest::new(date, "barber-1", 45)
//!     .with_shop_hours(vec![DayHours::new(WeekDay::Monday, "09:00", "18:00")])
//!     .with_barber_schedule(vec![
//!         BarberDaySchedule::new(WeekDay::Monday, "10:00", "17:00").with_lunch("12:00", "13:00"),
//!     ]);
//!
//! let slots = compute_available_slots(&request).unwrap();
//! assert_eq!(slots.first().map(|s| s.time().to_string()), Some("10:00:00".into()));
//! ```

pub mod conflicts;
pub mod engine;
pub mod error;
pub mod models;
pub mod resolver;
pub mod slots;
pub mod time;
pub mod validation;

pub use engine::{
    available_slot_labels, compute_available_slots, verify_slot_available, SlotRequest,
    DEFAULT_STEP_MINUTES,
};
pub use error::SlotError;
