//! Product entity.

use bigdecimal::BigDecimal;

use super::category::Category;
use super::validation::{DomainValidationError, validate_id, validate_product_fields};
use super::Named;

/// Mutable product fields, validated and applied as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub image: Option<String>,
    pub category_id: i32,
}

impl ProductFields {
    pub fn validate(&self) -> Result<(), DomainValidationError> {
        validate_product_fields(
            &self.name,
            &self.description,
            &self.price,
            self.stock,
            self.image.as_deref(),
        )
    }
}

/// A catalog product.
///
/// Every constructor and [`Product::update`] run the full rule set before any
/// field is written, so a `Product` value is always valid. The `category`
/// association is display data filled by the repository on reads; the
/// reference itself (`category_id`) is checked by the store, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: i32,
    fields: ProductFields,
    category: Option<Category>,
}

impl Product {
    /// Creates a product that has not been persisted yet (identity 0).
    pub fn new(fields: ProductFields) -> Result<Self, DomainValidationError> {
        fields.validate()?;
        Ok(Self {
            id: 0,
            fields,
            category: None,
        })
    }

    /// Rehydrates a product loaded from the store.
    pub fn with_id(id: i32, fields: ProductFields) -> Result<Self, DomainValidationError> {
        validate_id(id)?;
        fields.validate()?;
        Ok(Self {
            id,
            fields,
            category: None,
        })
    }

    /// Replaces every mutable field. On failure nothing changes.
    pub fn update(&mut self, fields: ProductFields) -> Result<(), DomainValidationError> {
        fields.validate()?;
        if fields.category_id != self.fields.category_id {
            self.category = None;
        }
        self.fields = fields;
        Ok(())
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn description(&self) -> &str {
        &self.fields.description
    }

    pub fn price(&self) -> &BigDecimal {
        &self.fields.price
    }

    pub fn stock(&self) -> i32 {
        self.fields.stock
    }

    pub fn image(&self) -> Option<&str> {
        self.fields.image.as_deref()
    }

    pub fn category_id(&self) -> i32 {
        self.fields.category_id
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn fields(&self) -> &ProductFields {
        &self.fields
    }

    pub(crate) fn assign_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl Named for Product {
    fn name(&self) -> &str {
        &self.fields.name
    }
}
