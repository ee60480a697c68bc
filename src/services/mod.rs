//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod category_service;
mod product_commands;
mod product_service;

pub use category_service::CategoryService;
pub use product_commands::{ProductCommand, ProductCommandDispatcher};
pub use product_service::ProductService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
#[derive(Clone)]
pub struct Services {
    pub products: ProductService,
    pub categories: CategoryService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            products: ProductService::new(repos.products),
            categories: CategoryService::new(repos.categories),
        }
    }
}
