//! Availability domain models.
//!
//! Input value objects for slot computation, shaped the way the booking
//! system's REST payloads deliver them:
//!
//! - [`WeekDay`]: weekday tag, Sunday = 0, the join key between tables
//! - [`DayHours`]: a shop's public operating hours for one weekday
//! - [`BarberDaySchedule`] / [`LunchBreak`]: a barber's per-day shift
//! - [`ExistingAppointment`]: read-only booking projection for conflicts
//!
//! None of these has persisted identity here — they are the parameter
//! data of a pure query, fetched fresh by the caller before each
//! computation.

mod appointment;
mod hours;
mod weekday;

pub use appointment::ExistingAppointment;
pub use hours::{BarberDaySchedule, DayHours, LunchBreak, CLOSED};
pub use weekday::WeekDay;
