//! # Salon Scheduling Rust Backend
//!
//! Appointment scheduling and reschedule-conflict engine for a hair-salon
//! booking system.
//!
//! Given a stylist, a proposed start time, and an ordered sequence of service
//! line-items, this crate computes the concrete time slots each service would
//! occupy, inserts the mandatory processing gap after chemical services, and
//! checks the resulting slots against two independent overlap sources:
//! existing bookings for that stylist and active schedule blocks (stylist-
//! specific or salon-wide).
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and DTO re-exports for callers
//! - [`models`]: Domain value objects (slots, service line-items, bookings)
//! - [`services`]: Slot builder and availability checker business logic
//! - [`db`]: Repository pattern and storage backends
//!
//! ## Usage
//!
//! ```ignore
//! use salon_rust::db::RepositoryFactory;
//! use salon_rust::services::availability::check_reschedule_availability;
//!
//! let repo = RepositoryFactory::create_local();
//! let outcome = check_reschedule_availability(
//!     Some(repo.as_ref()),
//!     Some(staff_id),
//!     Some(start),
//!     &rows,
//!     Some(&basket),
//!     None,
//! )
//! .await?;
//! if !outcome.ok {
//!     // surface outcome.message to the user
//! }
//! ```
//!
//! The availability check is read-only. Committing the reschedule belongs to
//! the booking write path, which should close the check-then-write race with
//! a database-level exclusion constraint (see the bundled migrations).

pub mod api;

pub mod db;
pub mod models;

pub mod services;
