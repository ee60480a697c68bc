//! Shared helpers: listing pagination and filtering, request validation.

pub mod filter;
pub mod pagination;
pub mod validate;

pub use filter::filter_by_name;
pub use pagination::{PaginatedList, PaginationError};
