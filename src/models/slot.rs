use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single contiguous time interval that one service line-item will occupy.
///
/// Slots are derived values: the slot builder produces one per service
/// line-item and nothing in this crate ever persists them. Serializes to
/// ISO-8601 instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ScheduleSlot {
    /// Create a new slot. Invariant: `end > start`; the slot builder
    /// guarantees this by clamping durations to at least one minute.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Half-open interval overlap test: `a.start < b.end && a.end > b.start`.
    ///
    /// Touching intervals (one ends exactly where the other starts) do not
    /// overlap, so back-to-back appointments are allowed.
    pub fn overlaps(&self, other_start: DateTime<Utc>, other_end: DateTime<Utc>) -> bool {
        self.start < other_end && self.end > other_start
    }

    /// Slot length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Smallest interval covering every slot in the list, as `(start, end)`.
///
/// Used by repository implementations as a coarse pre-filter: any record
/// overlapping one of the slots necessarily overlaps the envelope, so rows
/// can be narrowed in SQL before the exact per-slot test runs in Rust.
/// Returns `None` for an empty slot list.
pub fn slot_envelope(slots: &[ScheduleSlot]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = slots.first()?;
    let mut start = first.start;
    let mut end = first.end;
    for slot in &slots[1..] {
        if slot.start < start {
            start = slot.start;
        }
        if slot.end > end {
            end = slot.end;
        }
    }
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, hour, min, 0).unwrap()
    }

    #[test]
    fn test_overlap_strict_intersection() {
        let slot = ScheduleSlot::new(at(9, 0), at(10, 0));
        assert!(slot.overlaps(at(9, 30), at(10, 30)));
        assert!(slot.overlaps(at(8, 30), at(9, 30)));
        assert!(slot.overlaps(at(8, 0), at(11, 0)));
        assert!(slot.overlaps(at(9, 15), at(9, 45)));
    }

    #[test]
    fn test_overlap_touching_intervals_do_not_overlap() {
        let slot = ScheduleSlot::new(at(9, 0), at(10, 0));
        assert!(!slot.overlaps(at(10, 0), at(11, 0)));
        assert!(!slot.overlaps(at(8, 0), at(9, 0)));
    }

    #[test]
    fn test_overlap_disjoint() {
        let slot = ScheduleSlot::new(at(9, 0), at(10, 0));
        assert!(!slot.overlaps(at(11, 0), at(12, 0)));
        assert!(!slot.overlaps(at(7, 0), at(8, 0)));
    }

    #[test]
    fn test_duration_minutes() {
        let slot = ScheduleSlot::new(at(9, 0), at(10, 30));
        assert_eq!(slot.duration_minutes(), 90);
    }

    #[test]
    fn test_envelope_spans_all_slots() {
        let slots = vec![
            ScheduleSlot::new(at(9, 0), at(9, 30)),
            ScheduleSlot::new(at(10, 0), at(11, 30)),
        ];
        assert_eq!(slot_envelope(&slots), Some((at(9, 0), at(11, 30))));
    }

    #[test]
    fn test_envelope_empty() {
        assert_eq!(slot_envelope(&[]), None);
    }

    #[test]
    fn test_slot_serializes_to_iso8601() {
        let slot = ScheduleSlot::new(at(9, 0), at(9, 30));
        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains("2024-01-10T09:00:00Z"));
        assert!(json.contains("2024-01-10T09:30:00Z"));
    }
}
