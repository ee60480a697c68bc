//! Repository layer for data access operations.
//!
//! Services talk to storage only through [`ProductRepository`] and
//! [`CategoryRepository`]; PostgreSQL and in-memory backends implement both.

mod category_repo;
mod memory;
mod product_repo;
mod traits;

pub use category_repo::PgCategoryRepository;
pub use memory::{MemoryCatalog, MemoryCategoryRepository, MemoryProductRepository};
pub use product_repo::PgProductRepository;
pub use traits::{CategoryRepository, ProductRepository};

use std::sync::Arc;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Cloning only bumps reference counts.
#[derive(Clone)]
pub struct Repositories {
    pub products: Arc<dyn ProductRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl Repositories {
    /// Repositories backed by PostgreSQL.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn postgres(pool: AsyncDbPool) -> Self {
        Self {
            products: Arc::new(PgProductRepository::new(pool.clone())),
            categories: Arc::new(PgCategoryRepository::new(pool)),
        }
    }

    /// Repositories sharing one fresh in-memory catalog.
    pub fn memory() -> Self {
        let catalog = MemoryCatalog::new();
        Self {
            products: Arc::new(catalog.products()),
            categories: Arc::new(catalog.categories()),
        }
    }
}
