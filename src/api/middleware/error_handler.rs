//! Error handler for converting AppError to HTTP responses.
//!
//! Domain and paging failures keep their rule message verbatim. Storage and
//! internal failures are logged in full and returned sanitized.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::current_request_id;
use crate::api::dto::ErrorResponse;
use crate::error::AppError;
use crate::utils::PaginationError;

impl IntoResponse for AppError {
    /// # Status Code Mapping
    /// - DomainValidation, InvalidPage, Validation, ValidationErrors, BadRequest → 400
    /// - NotFound → 404
    /// - Duplicate → 409
    /// - ConnectionPool → 503
    /// - Database, Configuration, Internal → 500
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let mut error_response = match &self {
            AppError::DomainValidation(error) => {
                ErrorResponse::new("DOMAIN_VALIDATION", error.message())
            }
            AppError::InvalidPage(error) => {
                let details = match error {
                    PaginationError::InvalidPage {
                        page_index,
                        total_pages,
                    } => json!({ "page": page_index, "total_pages": total_pages }),
                    PaginationError::InvalidPageSize { page_size } => {
                        json!({ "page_size": page_size })
                    }
                };
                ErrorResponse::new("INVALID_PAGE", &error.to_string()).with_details(details)
            }
            AppError::NotFound { entity, field, value } => {
                ErrorResponse::not_found_error(entity, field, value)
            }
            AppError::Duplicate { entity, field, value } => {
                ErrorResponse::duplicate_error(entity, field, value)
            }
            AppError::Validation { field, reason } => {
                ErrorResponse::validation_error(field, reason)
            }
            AppError::ValidationErrors { errors } => {
                let details: Vec<_> = errors
                    .iter()
                    .map(|e| json!({ "field": e.field, "message": e.message }))
                    .collect();
                ErrorResponse::new("VALIDATION_ERROR", "Request validation failed")
                    .with_details(json!({ "errors": details }))
            }
            AppError::BadRequest { message } => ErrorResponse::new("BAD_REQUEST", message),
            AppError::Database { operation, .. } => ErrorResponse::new(
                "DATABASE_ERROR",
                &format!("Database operation failed: {}", operation),
            ),
            AppError::Configuration { key, .. } => ErrorResponse::new(
                "CONFIGURATION_ERROR",
                &format!("Configuration error: {}", key),
            ),
            AppError::ConnectionPool { .. } => {
                ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable")
            }
            AppError::Internal { .. } => {
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
            }
        };

        if let Some(request_id) = current_request_id() {
            error_response = error_response.with_request_id(&request_id);
        }

        (status, Json(error_response)).into_response()
    }
}

pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::DomainValidation(_)
        | AppError::InvalidPage(_)
        | AppError::Validation { .. }
        | AppError::ValidationErrors { .. }
        | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Database { .. } | AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
