//! Category DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Category;

/// Request body for creating or renaming a category.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[schema(example = json!({ "name": "Material Escolar" }))]
pub struct CategoryRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Material Escolar")]
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_category() {
        let category = Category::with_id(2, "Eletrônicos").unwrap();
        assert_eq!(
            CategoryResponse::from(category),
            CategoryResponse {
                id: 2,
                name: "Eletrônicos".to_string()
            }
        );
    }

    #[test]
    fn test_name_upper_bound() {
        let request = CategoryRequest {
            name: "c".repeat(101),
        };
        assert!(request.validate().is_err());
    }
}
