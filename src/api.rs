//! Public API surface for the scheduling backend.
//!
//! This file consolidates the identifier newtypes and re-exports the DTO
//! types callers work with. All types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::models::booking::Booking;
pub use crate::models::booking::ConflictOutcome;
pub use crate::models::booking::ConflictSource;
pub use crate::models::booking::ScheduleBlock;
pub use crate::models::service::BookingLine;
pub use crate::models::service::ServiceLineItem;
pub use crate::models::slot::ScheduleSlot;

use serde::{Deserialize, Serialize};

/// Staff (stylist) identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StaffId(pub i64);

/// Booking identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookingId(pub i64);

/// Schedule block identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScheduleBlockId(pub i64);

impl StaffId {
    pub fn new(value: i64) -> Self {
        StaffId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl BookingId {
    pub fn new(value: i64) -> Self {
        BookingId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ScheduleBlockId {
    pub fn new(value: i64) -> Self {
        ScheduleBlockId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ScheduleBlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StaffId> for i64 {
    fn from(id: StaffId) -> Self {
        id.0
    }
}
impl From<BookingId> for i64 {
    fn from(id: BookingId) -> Self {
        id.0
    }
}
impl From<ScheduleBlockId> for i64 {
    fn from(id: ScheduleBlockId) -> Self {
        id.0
    }
}
