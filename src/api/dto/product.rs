//! Product DTOs for API requests and responses.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domain::{Product, ProductFields};
use crate::models::{PRICE_OUT_OF_RANGE, price_fits_column};

/// Request body for creating or replacing a product.
///
/// Only the upper bounds are checked here. Required fields and minimum
/// lengths are enforced by the product itself, so missing text fields
/// deserialize to empty strings.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "name": "Caderno Universitario",
    "description": "Caderno de 200 folhas",
    "price": "24.90",
    "stock": 15,
    "image": "caderno.png",
    "category_id": 1
}))]
pub struct ProductRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: String,

    #[schema(value_type = String, example = "24.90")]
    #[validate(custom(function = "validate_price_column"))]
    pub price: BigDecimal,

    #[serde(default)]
    #[validate(range(max = 9999, message = "Stock must be at most 9999"))]
    pub stock: i32,

    #[validate(length(max = 250, message = "Image must be at most 250 characters"))]
    pub image: Option<String>,

    #[validate(range(min = 0, message = "Category id must not be negative"))]
    pub category_id: i32,
}

fn validate_price_column(price: &BigDecimal) -> Result<(), ValidationError> {
    if price_fits_column(price) {
        Ok(())
    } else {
        Err(ValidationError::new("price_column").with_message(Cow::Borrowed(PRICE_OUT_OF_RANGE)))
    }
}

impl ProductRequest {
    pub fn into_fields(self) -> ProductFields {
        ProductFields {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            image: self.image,
            category_id: self.category_id,
        }
    }
}

/// Product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "24.90")]
    pub price: BigDecimal,
    pub stock: i32,
    pub image: Option<String>,
    pub category_id: i32,
    /// Name of the referenced category, when it exists
    #[schema(example = "Material Escolar")]
    pub category_name: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let category_name = product.category().map(|c| c.name().to_string());
        let id = product.id();
        let ProductFields {
            name,
            description,
            price,
            stock,
            image,
            category_id,
        } = product.fields().clone();

        Self {
            id,
            name,
            description,
            price,
            stock,
            image,
            category_id,
            category_name,
        }
    }
}
