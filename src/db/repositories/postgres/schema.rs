//! Diesel schema for the scheduling tables.
//!
//! Only `bookings` is declared here: the schedule-block query goes through
//! `sql_query` because the stylist-association column name varies between
//! schema revisions (`staff_id` in the bundled migrations, `stylist_id` in
//! legacy databases) and Diesel's static DSL cannot express that.

diesel::table! {
    bookings (id) {
        id -> Int8,
        resource_id -> Int8,
        start_at -> Timestamptz,
        end_at -> Timestamptz,
    }
}
