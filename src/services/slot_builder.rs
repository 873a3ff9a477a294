//! Slot builder: interval packing for multi-service appointments.
//!
//! Turns "start rescheduling at instant T with these N ordered services"
//! into N concrete, non-overlapping, correctly-gapped time slots. Pure and
//! deterministic; no I/O.

use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::models::service::{BookingLine, ServiceLineItem};
use crate::models::slot::ScheduleSlot;

/// Mandatory processing gap (minutes) inserted after a chemical service
/// before the next slot starts, unless the caller overrides it.
pub const DEFAULT_CHEMICAL_GAP_MIN: i64 = 30;

/// Upper bound on a single service's duration. No salon appointment runs
/// past a day; anything larger is a corrupt catalog entry and would
/// otherwise overflow the datetime arithmetic.
const MAX_SERVICE_DURATION_MIN: i64 = 24 * 60;

/// Resolve the duration for one line-item, in minutes.
///
/// The basket entry's duration wins over the booking row's own. Anything
/// non-positive is clamped to one minute so a degenerate catalog entry can
/// never produce a zero-length (and therefore never-conflicting) slot, and
/// anything past a day is clamped down to keep the builder total over
/// whatever the catalog hands it.
fn resolve_duration_min(row: &BookingLine, basket_item: Option<&ServiceLineItem>) -> i64 {
    let raw = basket_item
        .and_then(|item| item.effective_duration_min())
        .unwrap_or(row.duration_min);
    raw.clamp(1, MAX_SERVICE_DURATION_MIN)
}

/// Classify the service feeding a slot, preferring the richer basket object.
fn is_chemical(row: &BookingLine, basket_item: Option<&ServiceLineItem>) -> bool {
    match basket_item {
        Some(item) => item.is_chemical(),
        None => row.is_chemical(),
    }
}

/// Compute the ordered slots a reschedule would occupy.
///
/// One slot per booking row, in the same order. After a chemical service the
/// next slot starts `chemical_gap_min` minutes later; otherwise slots are
/// back-to-back. The chemical slot's own duration is untouched and no gap is
/// appended after the final slot.
///
/// `basket`, when present, must have the same length and order as `rows`;
/// entries override the row's duration and classification text. Extra or
/// missing basket entries simply fall back to the row's own fields.
///
/// # Arguments
/// * `start` - Proposed start instant for the first service
/// * `rows` - Ordered booking rows being moved (non-empty; the availability
///   checker validates this before calling)
/// * `basket` - Optional richer service objects, same order as `rows`
/// * `chemical_gap_min` - Gap in minutes inserted after chemical services
pub fn build_slots(
    start: DateTime<Utc>,
    rows: &[BookingLine],
    basket: Option<&[ServiceLineItem]>,
    chemical_gap_min: i64,
) -> Vec<ScheduleSlot> {
    let mut slots = Vec::with_capacity(rows.len());
    let mut current_start = start;

    for (i, row) in rows.iter().enumerate() {
        let basket_item = basket.and_then(|items| items.get(i));
        let duration_min = resolve_duration_min(row, basket_item);
        let slot = ScheduleSlot::new(current_start, current_start + Duration::minutes(duration_min));

        current_start = if is_chemical(row, basket_item) {
            slot.end + Duration::minutes(chemical_gap_min)
        } else {
            slot.end
        };
        slots.push(slot);
    }

    debug!(
        "built {} slot(s) starting {} (gap {}min)",
        slots.len(),
        start,
        chemical_gap_min
    );
    slots
}
