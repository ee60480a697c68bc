//! Application state for the Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::config::{PaginationConfig, Settings, StorageBackend};
use crate::db::{AsyncDbPool, establish_async_connection_pool, run_pending_migrations};
use crate::error::AppResult;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Cloning is cheap since services and the pool are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Paging limits applied to listing requests
    pub pagination: PaginationConfig,
    /// Present when products and categories live in PostgreSQL
    pub db_pool: Option<AsyncDbPool>,
}

impl AppState {
    pub fn new(repos: Repositories, pagination: PaginationConfig, db_pool: Option<AsyncDbPool>) -> Self {
        Self {
            services: Services::new(repos),
            pagination,
            db_pool,
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(pagination: PaginationConfig) -> Self {
        Self::new(Repositories::memory(), pagination, None)
    }

    /// Builds the state for the configured storage backend.
    ///
    /// For PostgreSQL, pending migrations are applied first when
    /// `database.auto_migrate` is set.
    pub async fn from_settings(settings: &Settings) -> AppResult<Self> {
        match settings.database.backend {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Ok(Self::in_memory(settings.pagination))
            }
            StorageBackend::Postgres => {
                if settings.database.auto_migrate {
                    let applied = run_pending_migrations(&settings.database.url, false).await?;
                    tracing::info!(count = applied.len(), "Pending migrations applied");
                }

                tracing::info!("Initializing database connection pool...");
                let pool = establish_async_connection_pool(&settings.database).await?;
                tracing::info!("Database connection pool initialized");

                Ok(Self::new(
                    Repositories::postgres(pool.clone()),
                    settings.pagination,
                    Some(pool),
                ))
            }
        }
    }
}
