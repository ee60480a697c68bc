//! Data Transfer Objects for API requests and responses.
//!
//! Conversions between entities and DTOs are explicit `From` impls and
//! `into_fields` methods.

mod category;
mod error;
mod health;
mod pagination;
mod product;

pub use category::{CategoryRequest, CategoryResponse};
pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use pagination::{PageQuery, PagedResponse, PaginationMeta};
pub use product::{ProductRequest, ProductResponse};
