//! Service layer for business logic and orchestration.
//!
//! This module contains the scheduling business logic that sits between the
//! caller (the booking write path) and the repository layer:
//!
//! - [`slot_builder`]: pure slot computation with chemical-gap insertion
//! - [`availability`]: async reschedule conflict checking

pub mod availability;

pub mod slot_builder;

#[cfg(test)]
mod availability_tests;

pub use availability::check_reschedule_availability;
pub use slot_builder::{build_slots, DEFAULT_CHEMICAL_GAP_MIN};
