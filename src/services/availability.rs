//! Reschedule availability checking.
//!
//! Orchestrates the slot builder against the conflict repository: validate
//! the caller's input, compute the slots the move would occupy, then test
//! them against existing bookings and active schedule blocks. Queries run
//! sequentially; the block query only runs once the booking query comes
//! back clean, and its column-name fallback only runs after the primary
//! attempt fails.
//!
//! This check is read-only and takes no locks, so a small race window exists
//! between a passing check and the subsequent booking write. Closing it
//! belongs to the write path (see the exclusion constraint in the bundled
//! migrations).

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::api::{BookingId, ConflictOutcome, StaffId};
use crate::db::repository::{ConflictRepository, RepositoryResult, StaffColumn};
use crate::models::service::{BookingLine, ServiceLineItem};
use crate::services::slot_builder::{build_slots, DEFAULT_CHEMICAL_GAP_MIN};

/// Check whether a reschedule to `start` is free of conflicts.
///
/// Precondition failures (missing repository handle, stylist, start instant,
/// or an empty row list) come back as normal `ok: false` outcomes with a
/// user-facing message and never issue a query. A found conflict is also a
/// normal outcome, carrying the offending record. Only genuine data-access
/// failures return `Err`.
///
/// The bookings currently being moved (`rows`) are excluded from the overlap
/// query by id so a booking can be moved onto its own original time.
///
/// # Arguments
/// * `repo` - Conflict repository handle, if one is available
/// * `staff_id` - Target stylist
/// * `start` - Proposed start instant for the first service
/// * `rows` - Ordered booking rows being moved
/// * `basket` - Optional richer service objects, same order as `rows`
/// * `chemical_gap_min` - Gap override; defaults to 30 minutes
pub async fn check_reschedule_availability(
    repo: Option<&dyn ConflictRepository>,
    staff_id: Option<StaffId>,
    start: Option<DateTime<Utc>>,
    rows: &[BookingLine],
    basket: Option<&[ServiceLineItem]>,
    chemical_gap_min: Option<i64>,
) -> RepositoryResult<ConflictOutcome> {
    let Some(repo) = repo else {
        return Ok(ConflictOutcome::rejected("No database client."));
    };
    let Some(staff_id) = staff_id else {
        return Ok(ConflictOutcome::rejected("Pick a stylist."));
    };
    let Some(start) = start else {
        return Ok(ConflictOutcome::rejected("Pick a valid new date/time."));
    };
    if rows.is_empty() {
        return Ok(ConflictOutcome::rejected(
            "No booking rows found to reschedule.",
        ));
    }

    let gap = chemical_gap_min.unwrap_or(DEFAULT_CHEMICAL_GAP_MIN);
    let slots = build_slots(start, rows, basket, gap);
    let exclude: Vec<BookingId> = rows.iter().map(|row| row.id).collect();

    // Step 1: existing bookings for this stylist, minus the rows being moved.
    if let Some(booking) = repo
        .find_overlapping_booking(staff_id, &slots, &exclude)
        .await?
    {
        debug!(
            "reschedule for staff {} rejected: booking {} overlaps",
            staff_id, booking.id
        );
        return Ok(ConflictOutcome::booking_conflict(
            "That time overlaps an existing booking for this stylist.",
            booking,
        ));
    }

    // Step 2: active schedule blocks (stylist-specific or salon-wide). Probe
    // the conventional column name first; legacy schemas use stylist_id.
    let block = match repo
        .find_overlapping_block(staff_id, &slots, StaffColumn::StaffId)
        .await
    {
        Ok(block) => block,
        Err(err) if err.is_undefined_column() => {
            warn!(
                "schedule_blocks has no {} column, retrying with {}",
                StaffColumn::StaffId,
                StaffColumn::StylistId
            );
            repo.find_overlapping_block(staff_id, &slots, StaffColumn::StylistId)
                .await?
        }
        Err(err) => return Err(err),
    };

    if let Some(block) = block {
        debug!(
            "reschedule for staff {} rejected: schedule block {} overlaps",
            staff_id, block.id
        );
        return Ok(ConflictOutcome::block_conflict(
            "That time falls inside a schedule block.",
            block,
        ));
    }

    debug!("reschedule for staff {} at {} is available", staff_id, start);
    Ok(ConflictOutcome::clear())
}
