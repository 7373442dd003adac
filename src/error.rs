//! Error taxonomy for the availability engine.
//!
//! All outcomes here are local and synchronous — nothing in this crate
//! is retried, queued, or escalated, since it performs no I/O.
//!
//! A closed day is deliberately NOT an error: "no availability" is a
//! normal, expected result and callers receive it as an empty slot list.

use thiserror::Error;

/// Errors produced by slot computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// A time string did not match the strict `HH:MM` shape.
    ///
    /// This is a defect in upstream schedule data, not a user-correctable
    /// condition; hardened callers validate schedules at save time (see
    /// [`validation`](crate::validation)) so this never fires on read.
    #[error("invalid time format: '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    /// The request itself is malformed (non-positive duration or step).
    ///
    /// Programmer error — fails loudly instead of looping forever or
    /// producing a nonsensical single-instant result.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A booking-time re-check found the requested start time is no
    /// longer in the available set. The caller should recompute and ask
    /// the client to pick again.
    #[error("slot is no longer available")]
    SlotNoLongerAvailable,
}
