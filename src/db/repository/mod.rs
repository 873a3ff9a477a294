//! Repository trait definitions for database operations.
//!
//! The conflict engine only ever reads: it needs the first booking and the
//! first active schedule block overlapping a set of proposed slots. Both
//! operations are expressed here as a single focused trait so storage
//! backends stay swappable and the availability checker stays testable
//! against the in-memory implementation.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`ConflictRepository`]: overlap queries against bookings and blocks

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{Booking, BookingId, ScheduleBlock, ScheduleSlot, StaffId};

/// Candidate names for the schedule-block stylist-association column.
///
/// Two plausible names exist across schema revisions of the underlying
/// store. The availability checker probes [`StaffColumn::StaffId`] first and
/// falls back to [`StaffColumn::StylistId`] when the store reports that the
/// column does not exist. The bundled migrations create `staff_id`, so the
/// fallback only fires against legacy databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffColumn {
    StaffId,
    StylistId,
}

impl StaffColumn {
    /// Column name as it appears in the schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffColumn::StaffId => "staff_id",
            StaffColumn::StylistId => "stylist_id",
        }
    }
}

impl std::fmt::Display for StaffColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository trait for reschedule conflict queries.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ConflictRepository: Send + Sync {
    /// Check if the database connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Find the first booking for `staff_id` that overlaps any of the given
    /// slots, skipping the bookings named in `exclude` (the rows currently
    /// being moved, which must never conflict with themselves).
    ///
    /// Overlap uses the half-open test `booking.start < slot.end &&
    /// booking.end > slot.start`, OR'd across all slots. Results are ordered
    /// by booking start so "first" is deterministic.
    ///
    /// # Returns
    /// * `Ok(Some(Booking))` - The earliest conflicting booking
    /// * `Ok(None)` - No conflict
    /// * `Err(RepositoryError)` - If the query fails
    async fn find_overlapping_booking(
        &self,
        staff_id: StaffId,
        slots: &[ScheduleSlot],
        exclude: &[BookingId],
    ) -> RepositoryResult<Option<Booking>>;

    /// Find the first active schedule block that overlaps any of the given
    /// slots and applies to `staff_id` — either the block names that stylist
    /// in its stylist-association column or the column is NULL (a global,
    /// salon-wide block).
    ///
    /// `staff_column` names the stylist-association column to query. A
    /// backend whose schema lacks that column must surface the failure as a
    /// query error recognisable via
    /// [`RepositoryError::is_undefined_column`]; the caller retries with the
    /// alternate name.
    ///
    /// # Returns
    /// * `Ok(Some(ScheduleBlock))` - The earliest conflicting block
    /// * `Ok(None)` - No conflict
    /// * `Err(RepositoryError)` - If the query fails
    async fn find_overlapping_block(
        &self,
        staff_id: StaffId,
        slots: &[ScheduleSlot],
        staff_column: StaffColumn,
    ) -> RepositoryResult<Option<ScheduleBlock>>;
}
