//! Error response DTOs.

use serde::Serialize;
use serde_json::{Value as JsonValue, json};
use utoipa::ToSchema;

/// Standard error response format.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "code": "DOMAIN_VALIDATION",
    "message": "Invalid name, too short, minimum 3 characters"
}))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    pub fn with_details(mut self, details: JsonValue) -> Self {
        self.details = Some(details);
        self
    }

    /// Adds request ID to the error response for correlation.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }

    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new("NOT_FOUND", &format!("{} not found", capitalize(entity))).with_details(json!({
            "entity": entity,
            "field": field,
            "value": value
        }))
    }

    pub fn duplicate_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "DUPLICATE_ENTRY",
            &format!("{} with this {} already exists", capitalize(entity), field),
        )
        .with_details(json!({
            "entity": entity,
            "field": field,
            "value": value
        }))
    }

    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::new("VALIDATION_ERROR", reason).with_details(json!({ "field": field }))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_skipped() {
        let json = serde_json::to_value(ErrorResponse::new("INVALID_PAGE", "Invalid page index"))
            .unwrap();
        assert_eq!(
            json,
            json!({ "code": "INVALID_PAGE", "message": "Invalid page index" })
        );
    }

    #[test]
    fn test_not_found_error() {
        let response = ErrorResponse::not_found_error("product", "id", "7").with_request_id("req-1");
        assert_eq!(response.code, "NOT_FOUND");
        assert_eq!(response.message, "Product not found");
        assert_eq!(response.details.unwrap()["value"], "7");
        assert_eq!(response.request_id.as_deref(), Some("req-1"));
    }
}
