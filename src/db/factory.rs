//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository
//! instances based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
use super::repositories::PostgresRepository;
use super::repository::{ConflictRepository, RepositoryError, RepositoryResult};
#[cfg(feature = "postgres-repo")]
use super::PostgresConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Postgres + Diesel implementation
    Postgres,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("postgres", "local")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to Postgres if a database URL is
    /// present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("DATABASE_URL").is_ok() || std::env::var("PG_DATABASE_URL").is_ok() {
            Self::Postgres
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use salon_rust::db::{RepositoryFactory, RepositoryType};
///
/// let local_repo = RepositoryFactory::create_local();
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    ///
    /// # Returns
    /// * `Ok(Arc<dyn ConflictRepository>)` - Boxed repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub async fn create(repo_type: RepositoryType) -> RepositoryResult<Arc<dyn ConflictRepository>> {
        match repo_type {
            RepositoryType::Postgres => {
                #[cfg(feature = "postgres-repo")]
                {
                    let config = PostgresConfig::from_env()
                        .map_err(RepositoryError::configuration)?;
                    let pg = Self::create_postgres(&config).await?;
                    Ok(pg as Arc<dyn ConflictRepository>)
                }
                #[cfg(not(feature = "postgres-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Postgres repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a Postgres repository.
    ///
    /// # Arguments
    /// * `config` - Postgres configuration
    #[cfg(feature = "postgres-repo")]
    pub async fn create_postgres(
        config: &PostgresConfig,
    ) -> RepositoryResult<Arc<PostgresRepository>> {
        let repo = PostgresRepository::new(config.clone())?;
        Ok(Arc::new(repo))
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn ConflictRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` to determine which repository to create.
    /// Defaults to Postgres if a database URL is set, otherwise Local.
    pub async fn from_env() -> RepositoryResult<Arc<dyn ConflictRepository>> {
        Self::create(RepositoryType::from_env()).await
    }

    /// Create repository from a TOML configuration file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the repository.toml configuration file
    pub async fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn ConflictRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config).await
    }

    /// Create repository from a RepositoryConfig instance.
    async fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn ConflictRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::Postgres => {
                #[cfg(feature = "postgres-repo")]
                {
                    let pg_config = config.to_postgres_config()?.ok_or_else(|| {
                        RepositoryError::configuration(
                            "Postgres repository requires database configuration",
                        )
                    })?;
                    let pg = Self::create_postgres(&pg_config).await?;
                    Ok(pg as Arc<dyn ConflictRepository>)
                }
                #[cfg(not(feature = "postgres-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Postgres repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!(
            RepositoryType::from_str("local").unwrap(),
            RepositoryType::Local
        );
        assert_eq!(
            RepositoryType::from_str("postgres").unwrap(),
            RepositoryType::Postgres
        );
        assert_eq!(
            RepositoryType::from_str("Pg").unwrap(),
            RepositoryType::Postgres
        );
        assert!(RepositoryType::from_str("invalid").is_err());
    }

    #[tokio::test]
    async fn test_create_local_repository() {
        let repo = RepositoryFactory::create_local();
        assert!(repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_create_from_type() {
        let repo = RepositoryFactory::create(RepositoryType::Local).await.unwrap();
        assert!(repo.health_check().await.unwrap());
    }
}
