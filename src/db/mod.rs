//! Database module for scheduling data access.
//!
//! This module provides abstractions for the conflict-engine's read path via
//! the Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (booking write path)                 │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services::availability)                 │
//! │  - Precondition validation                              │
//! │  - Slot computation + conflict orchestration            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  ConflictRepository trait - Abstract Interface          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────┐
//!     │ Local (in-memory)  │  Postgres (Diesel)
//!     └──────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```ignore
//! use salon_rust::db::{factory::RepositoryFactory, RepositoryType};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::from_env().await?;
//!     assert!(repo.health_check().await?);
//!     Ok(())
//! }
//! ```

// Feature flag priority: postgres > local
// When multiple features are enabled (e.g., --all-features), postgres takes precedence.
#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

// Postgres config is colocated with the repository implementation.
#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::{PoolStats, PostgresConfig};
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    _private: (),
}
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone, Default)]
pub struct PoolStats {
    _private: (),
}

pub use repo_config::RepositoryConfig;

// Repository trait and implementations
pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::PostgresRepository;
pub use repository::{
    ConflictRepository, ErrorContext, RepositoryError, RepositoryResult, StaffColumn,
};
