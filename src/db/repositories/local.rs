//! In-memory local repository implementation.
//!
//! Provides a local implementation of the conflict repository suitable for
//! unit testing and local development. All data is stored in memory using
//! Vec structures behind an `RwLock`, giving fast, deterministic, isolated
//! execution.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::api::{Booking, BookingId, ScheduleBlock, ScheduleBlockId, ScheduleSlot, StaffId};
use crate::db::repository::{ConflictRepository, RepositoryError, RepositoryResult, StaffColumn};

/// In-memory conflict repository.
///
/// Besides the trait implementation it exposes seeding helpers and two test
/// hooks: `set_healthy` to simulate connection failures and
/// `use_legacy_staff_column` to simulate a legacy schema whose stylist
/// column is named `stylist_id`, which makes queries against `staff_id`
/// fail with an undefined-column error exactly as Postgres would.
///
/// # Example
/// ```ignore
/// let repo = LocalRepository::new();
/// repo.add_booking(booking);
/// let hit = repo
///     .find_overlapping_booking(staff_id, &slots, &[])
///     .await
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
    query_count: Arc<AtomicU64>,
}

struct LocalData {
    bookings: Vec<Booking>,
    blocks: Vec<ScheduleBlock>,

    // ID counters for seeding helpers
    next_booking_id: i64,
    next_block_id: i64,

    // Connection health
    is_healthy: bool,

    // When true, only the legacy `stylist_id` column "exists".
    legacy_staff_column: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            bookings: Vec::new(),
            blocks: Vec::new(),
            next_booking_id: 1,
            next_block_id: 1,
            is_healthy: true,
            legacy_staff_column: false,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
            query_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Add a booking, assigning it the next free id.
    ///
    /// # Returns
    /// The ID assigned to the booking
    pub fn add_booking(&self, mut booking: Booking) -> BookingId {
        let mut data = self.data.write().unwrap();
        let id = BookingId(data.next_booking_id);
        data.next_booking_id += 1;
        booking.id = id;
        data.bookings.push(booking);
        id
    }

    /// Add a schedule block, assigning it the next free id.
    ///
    /// # Returns
    /// The ID assigned to the block
    pub fn add_block(&self, mut block: ScheduleBlock) -> ScheduleBlockId {
        let mut data = self.data.write().unwrap();
        let id = ScheduleBlockId(data.next_block_id);
        data.next_block_id += 1;
        block.id = id;
        data.blocks.push(block);
        id
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Simulate a legacy schema where the stylist column is `stylist_id`.
    /// Queries naming `staff_id` will fail with an undefined-column error.
    pub fn use_legacy_staff_column(&self, legacy: bool) {
        let mut data = self.data.write().unwrap();
        data.legacy_staff_column = legacy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Number of overlap queries issued so far.
    ///
    /// Lets tests assert that precondition failures short-circuit without
    /// touching the store.
    pub fn query_count(&self) -> u64 {
        self.query_count.load(Ordering::Relaxed)
    }

    /// Get the number of bookings stored.
    pub fn booking_count(&self) -> usize {
        self.data.read().unwrap().bookings.len()
    }

    fn column_exists(data: &LocalData, staff_column: StaffColumn) -> bool {
        match staff_column {
            StaffColumn::StaffId => !data.legacy_staff_column,
            StaffColumn::StylistId => data.legacy_staff_column,
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConflictRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().unwrap().is_healthy)
    }

    async fn find_overlapping_booking(
        &self,
        staff_id: StaffId,
        slots: &[ScheduleSlot],
        exclude: &[BookingId],
    ) -> RepositoryResult<Option<Booking>> {
        self.query_count.fetch_add(1, Ordering::Relaxed);
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection("local repository marked unhealthy"));
        }

        let mut candidates: Vec<&Booking> = data
            .bookings
            .iter()
            .filter(|b| b.resource_id == staff_id)
            .filter(|b| !exclude.contains(&b.id))
            .filter(|b| slots.iter().any(|slot| slot.overlaps(b.start, b.end)))
            .collect();
        candidates.sort_by_key(|b| b.start);

        Ok(candidates.first().map(|b| (*b).clone()))
    }

    async fn find_overlapping_block(
        &self,
        staff_id: StaffId,
        slots: &[ScheduleSlot],
        staff_column: StaffColumn,
    ) -> RepositoryResult<Option<ScheduleBlock>> {
        self.query_count.fetch_add(1, Ordering::Relaxed);
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection("local repository marked unhealthy"));
        }
        if !Self::column_exists(&data, staff_column) {
            // Same shape as the Postgres 42703 error message.
            return Err(RepositoryError::query(format!(
                "column \"{}\" does not exist",
                staff_column
            )));
        }

        let mut candidates: Vec<&ScheduleBlock> = data
            .blocks
            .iter()
            .filter(|b| b.is_active)
            .filter(|b| b.applies_to(staff_id))
            .filter(|b| slots.iter().any(|slot| slot.overlaps(b.start, b.end)))
            .collect();
        candidates.sort_by_key(|b| b.start);

        Ok(candidates.first().map(|b| (*b).clone()))
    }
}
