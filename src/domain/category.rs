//! Category entity.

use super::validation::{DomainValidationError, validate_id, validate_name};
use super::Named;

/// A product category. Only the name is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: i32,
    name: String,
}

impl Category {
    /// Creates a category that has not been persisted yet (identity 0).
    pub fn new(name: impl Into<String>) -> Result<Self, DomainValidationError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { id: 0, name })
    }

    /// Rehydrates a category loaded from the store.
    pub fn with_id(id: i32, name: impl Into<String>) -> Result<Self, DomainValidationError> {
        validate_id(id)?;
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { id, name })
    }

    /// Replaces the name. On failure the category keeps its previous name.
    pub fn update(&mut self, name: impl Into<String>) -> Result<(), DomainValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity assigned by the store once the category has been persisted.
    pub(crate) fn assign_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl Named for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{INVALID_ID, NAME_REQUIRED, NAME_TOO_SHORT};

    #[test]
    fn test_new_category() {
        let category = Category::new("Material Escolar").unwrap();
        assert_eq!(category.id(), 0);
        assert_eq!(category.name(), "Material Escolar");
    }

    #[test]
    fn test_with_id_rejects_negative_id() {
        let err = Category::with_id(-1, "Material Escolar").unwrap_err();
        assert_eq!(err.message(), INVALID_ID);
    }

    #[test]
    fn test_id_checked_before_name() {
        let err = Category::with_id(-1, "").unwrap_err();
        assert_eq!(err.message(), INVALID_ID);
    }

    #[test]
    fn test_new_rejects_empty_and_short_names() {
        assert_eq!(Category::new("").unwrap_err().message(), NAME_REQUIRED);
        assert_eq!(Category::new("Ma").unwrap_err().message(), NAME_TOO_SHORT);
    }

    #[test]
    fn test_no_upper_bound_on_entity_name() {
        assert!(Category::new("x".repeat(500)).is_ok());
    }

    #[test]
    fn test_update_with_valid_name() {
        let mut category = Category::new("Material Escola").unwrap();
        category.update("Material Escolar").unwrap();
        assert_eq!(category.name(), "Material Escolar");
    }

    #[test]
    fn test_rejected_update_keeps_previous_state() {
        let mut category = Category::with_id(7, "Material Escola").unwrap();
        let err = category.update("Ma").unwrap_err();
        assert_eq!(err.message(), NAME_TOO_SHORT);
        assert_eq!(category.name(), "Material Escola");
        assert_eq!(category.id(), 7);

        let err = category.update("").unwrap_err();
        assert_eq!(err.message(), NAME_REQUIRED);
        assert_eq!(category.name(), "Material Escola");
    }

    #[test]
    fn test_update_with_current_values_is_idempotent() {
        let mut category = Category::with_id(3, "Eletronicos").unwrap();
        let before = category.clone();
        category.update(before.name().to_string()).unwrap();
        category.update(before.name().to_string()).unwrap();
        assert_eq!(category, before);
    }
}
