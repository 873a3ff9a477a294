//! Row types mapping Postgres results to domain entities.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool, Nullable, Timestamptz};

use crate::api::{Booking, BookingId, ScheduleBlock, ScheduleBlockId, StaffId};

use super::schema::bookings;

/// A booking row loaded through the Diesel DSL.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookingRow {
    pub id: i64,
    pub resource_id: i64,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: BookingId(row.id),
            start: row.start_at,
            end: row.end_at,
            resource_id: StaffId(row.resource_id),
        }
    }
}

/// A schedule-block row loaded through `sql_query`.
///
/// The stylist-association column is aliased to `staff_ref` in the query
/// text so the same row type serves both column-name variants.
#[derive(Debug, Clone, QueryableByName)]
pub struct ScheduleBlockRow {
    #[diesel(sql_type = BigInt)]
    pub id: i64,
    #[diesel(sql_type = Timestamptz)]
    pub start_at: DateTime<Utc>,
    #[diesel(sql_type = Timestamptz)]
    pub end_at: DateTime<Utc>,
    #[diesel(sql_type = Bool)]
    pub is_active: bool,
    #[diesel(sql_type = Bool)]
    pub is_locked: bool,
    #[diesel(sql_type = Nullable<BigInt>)]
    pub staff_ref: Option<i64>,
}

impl From<ScheduleBlockRow> for ScheduleBlock {
    fn from(row: ScheduleBlockRow) -> Self {
        ScheduleBlock {
            id: ScheduleBlockId(row.id),
            start: row.start_at,
            end: row.end_at,
            is_active: row.is_active,
            is_locked: row.is_locked,
            staff_id: row.staff_ref.map(StaffId),
        }
    }
}
