//! External scheduling entities and the availability-check result type.
//!
//! Bookings and schedule blocks are read-only to this crate: the conflict
//! engine treats them purely as interval obstacles. Their lifecycle belongs
//! to the booking write path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{BookingId, ScheduleBlockId, StaffId};

/// An existing booking for a stylist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// The stylist this booking occupies.
    pub resource_id: StaffId,
}

/// An administrator-defined unavailability interval.
///
/// A block with no stylist association is a global (salon-wide) closure and
/// applies to every stylist. Only active blocks are considered by the
/// conflict engine; `is_locked` is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    pub id: ScheduleBlockId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub is_active: bool,
    pub is_locked: bool,
    #[serde(default)]
    pub staff_id: Option<StaffId>,
}

impl ScheduleBlock {
    /// Whether this block constrains the given stylist (specific match or
    /// salon-wide).
    pub fn applies_to(&self, staff_id: StaffId) -> bool {
        match self.staff_id {
            Some(block_staff) => block_staff == staff_id,
            None => true,
        }
    }
}

/// The record that made a reschedule attempt fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConflictSource {
    Booking(Booking),
    ScheduleBlock(ScheduleBlock),
}

/// Result of an availability check.
///
/// `ok: false` covers both precondition failures (bad input, with a
/// user-facing message) and genuine conflicts (message plus the offending
/// record). System errors are never encoded here; they surface as
/// `Err(RepositoryError)` from the checker so callers can distinguish
/// "fix your input", "that time is unavailable" and "something went wrong"
/// without inspecting strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<ConflictSource>,
}

impl ConflictOutcome {
    /// The requested slots are free.
    pub fn clear() -> Self {
        Self {
            ok: true,
            message: None,
            conflict: None,
        }
    }

    /// Precondition failure: the caller must fix the input.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            conflict: None,
        }
    }

    /// A slot collides with an existing booking.
    pub fn booking_conflict(message: impl Into<String>, booking: Booking) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            conflict: Some(ConflictSource::Booking(booking)),
        }
    }

    /// A slot collides with an active schedule block.
    pub fn block_conflict(message: impl Into<String>, block: ScheduleBlock) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            conflict: Some(ConflictSource::ScheduleBlock(block)),
        }
    }
}
