//! Pagination-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::config::PaginationConfig;
use crate::error::{AppError, AppResult};
use crate::utils::PaginatedList;

/// Query parameters for listing endpoints.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[param(minimum = 1, example = 1)]
    pub page: u32,

    /// Number of items per page; the configured default when omitted
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100, example = 4)]
    pub page_size: Option<u32>,

    /// Case-insensitive substring the name must contain
    #[param(example = "mat")]
    pub filter: Option<String>,
}

impl PageQuery {
    /// Effective page size under the configured limits.
    pub fn page_size(&self, config: &PaginationConfig) -> AppResult<u32> {
        match self.page_size {
            None => Ok(config.default_page_size),
            Some(size) if size <= config.max_page_size => Ok(size),
            Some(_) => Err(AppError::Validation {
                field: "page_size".to_string(),
                reason: format!("Page size must be at most {}", config.max_page_size),
            }),
        }
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

fn default_page() -> u32 {
    1
}

/// Generic paged response wrapper.
#[derive(Debug, Serialize, ToSchema)]
pub struct PagedResponse<T> {
    /// The data items for this page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page number (1-based)
    #[schema(example = 1)]
    pub page: u32,

    #[schema(example = 4)]
    pub page_size: u32,

    /// Number of items across all pages after filtering
    #[schema(example = 10)]
    pub total_items: u64,

    #[schema(example = 3)]
    pub total_pages: u32,

    #[schema(example = true)]
    pub has_next: bool,

    #[schema(example = false)]
    pub has_prev: bool,
}

impl<T> PagedResponse<T> {
    /// Converts a page of entities into a page of transfer records.
    pub fn from_list<E>(list: PaginatedList<E>) -> Self
    where
        T: From<E>,
    {
        let pagination = PaginationMeta {
            page: list.page_index(),
            page_size: list.page_size(),
            total_items: list.total_count() as u64,
            total_pages: list.total_pages(),
            has_next: list.has_next_page(),
            has_prev: list.has_previous_page(),
        };

        Self {
            data: list.map(T::from).into_items(),
            pagination,
        }
    }
}
