//! Postgres repository implementation using Diesel.
//!
//! This module implements the conflict repository against a Postgres
//! database with the `bookings` and `schedule_blocks` tables created by the
//! bundled migrations.
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - Automatic retry for transient failures
//! - Connection health monitoring
//! - Automatic migration execution
//!
//! ## Query strategy
//!
//! Both overlap queries narrow rows in SQL with the coarse slot envelope
//! (earliest slot start to latest slot end) and refine per-slot in Rust.
//! Any record overlapping one of the slots necessarily overlaps the
//! envelope, so the refinement never loses a conflict. The schedule-block
//! query is issued through `sql_query` with the stylist column name
//! substituted from [`StaffColumn`], so a legacy schema raises the genuine
//! Postgres undefined-column error that drives the caller's fallback.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)
//! - `PG_MAX_RETRIES`: Maximum retry attempts for transient failures (default: 3)
//! - `PG_RETRY_DELAY_MS`: Initial retry delay in milliseconds (default: 100)

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel::sql_types::{BigInt, Timestamptz};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task;

use crate::api::{Booking, BookingId, ScheduleBlock, ScheduleSlot, StaffId};
use crate::db::repository::{
    ConflictRepository, ErrorContext, RepositoryError, RepositoryResult, StaffColumn,
};
use crate::models::slot::slot_envelope;

mod models;
mod schema;

use models::{BookingRow, ScheduleBlockRow};

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
    /// Maximum number of retry attempts for transient failures
    pub max_retries: u32,
    /// Initial retry delay in milliseconds (doubles with each retry)
    pub retry_delay_ms: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
            max_retries: 3,
            retry_delay_ms: 100,
        }
    }
}

impl PostgresConfig {
    /// Create configuration from environment variables (see module docs).
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let max_pool_size = std::env::var("PG_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        let min_pool_size = std::env::var("PG_POOL_MIN")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1);

        let connection_timeout_sec = std::env::var("PG_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let idle_timeout_sec = std::env::var("PG_IDLE_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(600);

        let max_retries = std::env::var("PG_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(3);

        let retry_delay_ms = std::env::var("PG_RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(100);

        Ok(Self {
            database_url,
            max_pool_size,
            min_pool_size,
            connection_timeout_sec,
            idle_timeout_sec,
            max_retries,
            retry_delay_ms,
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Pool health statistics.
#[derive(Debug, Clone, Default)]
pub struct PoolStats {
    /// Number of connections currently in use
    pub connections_in_use: u32,
    /// Number of idle connections
    pub idle_connections: u32,
    /// Total number of connections in the pool
    pub total_connections: u32,
    /// Maximum pool size
    pub max_size: u32,
    /// Total successful queries executed
    pub total_queries: u64,
    /// Total failed queries
    pub failed_queries: u64,
    /// Total retried operations
    pub retried_operations: u64,
}

/// Diesel-backed conflict repository for Postgres.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
    config: PostgresConfig,
    // Metrics counters
    total_queries: std::sync::Arc<AtomicU64>,
    failed_queries: std::sync::Arc<AtomicU64>,
    retried_operations: std::sync::Arc<AtomicU64>,
}

impl PostgresRepository {
    /// Create a new repository and run pending migrations.
    ///
    /// # Arguments
    /// * `config` - Database configuration
    ///
    /// # Returns
    /// * `Ok(PostgresRepository)` on success
    /// * `Err(RepositoryError)` if connection or migration fails
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true) // Validate connections before use
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("create_pool")
                        .with_details(format!("max_size={}", config.max_pool_size)),
                )
            })?;

        // Run migrations once during initialization
        {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("get_connection_for_migrations"),
                )
            })?;
            Self::run_migrations(&mut conn)?;
        }

        Ok(Self {
            pool,
            config,
            total_queries: std::sync::Arc::new(AtomicU64::new(0)),
            failed_queries: std::sync::Arc::new(AtomicU64::new(0)),
            retried_operations: std::sync::Arc::new(AtomicU64::new(0)),
        })
    }

    /// Run pending database migrations.
    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Migration failed: {}", e),
                ErrorContext::new("run_migrations"),
            )
        })?;

        Ok(())
    }

    /// Execute a database operation with automatic retry for transient failures.
    ///
    /// Retries up to `max_retries` times with exponential backoff when a
    /// retryable error occurs (connection errors, timeouts, serialization
    /// failures). Undefined-column errors are not retryable, so the caller's
    /// column-name fallback sees them after a single attempt.
    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static + Clone,
    {
        let pool = self.pool.clone();
        let max_retries = self.config.max_retries;
        let retry_delay_ms = self.config.retry_delay_ms;
        let total_queries = self.total_queries.clone();
        let failed_queries = self.failed_queries.clone();
        let retried_operations = self.retried_operations.clone();

        task::spawn_blocking(move || {
            let mut last_error = None;
            let mut retry_delay = Duration::from_millis(retry_delay_ms);

            for attempt in 0..=max_retries {
                if attempt > 0 {
                    retried_operations.fetch_add(1, Ordering::Relaxed);
                    std::thread::sleep(retry_delay);
                    retry_delay *= 2; // Exponential backoff
                }

                // Get connection
                let mut conn = match pool.get() {
                    Ok(c) => c,
                    Err(e) => {
                        let err = RepositoryError::connection_with_context(
                            e.to_string(),
                            ErrorContext::new("get_connection")
                                .with_details(format!("attempt={}", attempt + 1))
                                .retryable(),
                        );
                        if attempt < max_retries {
                            last_error = Some(err);
                            continue;
                        }
                        failed_queries.fetch_add(1, Ordering::Relaxed);
                        return Err(err);
                    }
                };

                // Execute the operation
                total_queries.fetch_add(1, Ordering::Relaxed);
                match f.clone()(&mut conn) {
                    Ok(result) => return Ok(result),
                    Err(e) if e.is_retryable() && attempt < max_retries => {
                        last_error = Some(e);
                        continue;
                    }
                    Err(e) => {
                        failed_queries.fetch_add(1, Ordering::Relaxed);
                        return Err(e);
                    }
                }
            }

            failed_queries.fetch_add(1, Ordering::Relaxed);
            Err(last_error.unwrap_or_else(|| {
                RepositoryError::internal("Max retries exceeded with no error captured")
            }))
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new("spawn_blocking"),
            )
        })?
    }

    /// Get pool health statistics.
    pub fn get_pool_stats(&self) -> PoolStats {
        let state = self.pool.state();
        PoolStats {
            connections_in_use: state.connections - state.idle_connections,
            idle_connections: state.idle_connections,
            total_connections: state.connections,
            max_size: self.config.max_pool_size,
            total_queries: self.total_queries.load(Ordering::Relaxed),
            failed_queries: self.failed_queries.load(Ordering::Relaxed),
            retried_operations: self.retried_operations.load(Ordering::Relaxed),
        }
    }

    /// Check if the database connection is healthy.
    pub async fn is_healthy(&self) -> bool {
        self.health_check().await.unwrap_or(false)
    }
}

/// Query text for the schedule-block overlap lookup.
///
/// The stylist column is aliased to `staff_ref` so one row type covers both
/// schema revisions. `column` comes from [`StaffColumn::as_str`], never from
/// user input.
fn block_query_sql(column: &str) -> String {
    format!(
        "SELECT id, start_at, end_at, is_active, is_locked, {col} AS staff_ref \
         FROM schedule_blocks \
         WHERE is_active = TRUE \
           AND ({col} = $1 OR {col} IS NULL) \
           AND start_at < $2 AND end_at > $3 \
         ORDER BY start_at ASC",
        col = column
    )
}

#[async_trait]
impl ConflictRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn(|conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map(|_| true)
                .map_err(RepositoryError::from)
        })
        .await
    }

    async fn find_overlapping_booking(
        &self,
        staff_id: StaffId,
        slots: &[ScheduleSlot],
        exclude: &[BookingId],
    ) -> RepositoryResult<Option<Booking>> {
        let Some((env_start, env_end)) = slot_envelope(slots) else {
            return Ok(None);
        };
        let slots = slots.to_vec();
        let exclude = exclude.to_vec();

        self.with_conn(move |conn| {
            use schema::bookings::dsl::*;

            let rows: Vec<BookingRow> = bookings
                .filter(resource_id.eq(staff_id.value()))
                .filter(start_at.lt(env_end))
                .filter(end_at.gt(env_start))
                .order(start_at.asc())
                .select(BookingRow::as_select())
                .load(conn)
                .map_err(|e| {
                    RepositoryError::from(e)
                        .with_operation("find_overlapping_booking")
                })?;

            let hit = rows
                .into_iter()
                .map(Booking::from)
                .find(|booking| {
                    !exclude.contains(&booking.id)
                        && slots
                            .iter()
                            .any(|slot| slot.overlaps(booking.start, booking.end))
                });
            Ok(hit)
        })
        .await
    }

    async fn find_overlapping_block(
        &self,
        staff_id: StaffId,
        slots: &[ScheduleSlot],
        staff_column: StaffColumn,
    ) -> RepositoryResult<Option<ScheduleBlock>> {
        let Some((env_start, env_end)) = slot_envelope(slots) else {
            return Ok(None);
        };
        let slots = slots.to_vec();

        self.with_conn(move |conn| {
            let rows: Vec<ScheduleBlockRow> = sql_query(block_query_sql(staff_column.as_str()))
                .bind::<BigInt, _>(staff_id.value())
                .bind::<Timestamptz, _>(env_end)
                .bind::<Timestamptz, _>(env_start)
                .load(conn)
                .map_err(|e| {
                    RepositoryError::from(e)
                        .with_operation("find_overlapping_block")
                })?;

            let hit = rows
                .into_iter()
                .map(ScheduleBlock::from)
                .find(|block| slots.iter().any(|slot| slot.overlaps(block.start, block.end)));
            Ok(hit)
        })
        .await
    }
}
