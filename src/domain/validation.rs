//! Field invariants shared by the catalog entities.
//!
//! Every rule is expressed through [`validate`], which fails fast with the
//! rule's message. Composite checks run their rules in a fixed order and stop
//! at the first violation, so callers always see a single message.

use bigdecimal::{BigDecimal, Zero};
use thiserror::Error;

pub const NAME_REQUIRED: &str = "Invalid name, Name is required";
pub const NAME_TOO_SHORT: &str = "Invalid name, too short, minimum 3 characters";
pub const DESCRIPTION_REQUIRED: &str = "Invalid description. Description is required";
pub const DESCRIPTION_TOO_SHORT: &str = "Invalid description, too short, minimum 5 characters";
pub const INVALID_PRICE: &str = "Invalid price value";
pub const INVALID_STOCK: &str = "Invalid stock value";
pub const IMAGE_TOO_LONG: &str = "Invalid image name, too long, maximum 250 characters";
pub const INVALID_ID: &str = "Invalid Id value";

pub const NAME_MIN_LENGTH: usize = 3;
pub const DESCRIPTION_MIN_LENGTH: usize = 5;
pub const IMAGE_MAX_LENGTH: usize = 250;
pub const STOCK_MIN: i32 = 1;

/// A violated entity invariant. Displays the rule's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DomainValidationError {
    message: String,
}

impl DomainValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Fails with `message` when `condition` holds; otherwise does nothing.
pub fn validate(condition: bool, message: &str) -> Result<(), DomainValidationError> {
    if condition {
        return Err(DomainValidationError::new(message));
    }
    Ok(())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Identity supplied for rehydration must not be negative.
pub fn validate_id(id: i32) -> Result<(), DomainValidationError> {
    validate(id < 0, INVALID_ID)
}

/// Name rules: required, then minimum length.
pub fn validate_name(name: &str) -> Result<(), DomainValidationError> {
    validate(name.is_empty(), NAME_REQUIRED)?;
    validate(char_len(name) < NAME_MIN_LENGTH, NAME_TOO_SHORT)
}

/// Full product rule set in evaluation order:
/// name, description, price, stock, image length.
pub fn validate_product_fields(
    name: &str,
    description: &str,
    price: &BigDecimal,
    stock: i32,
    image: Option<&str>,
) -> Result<(), DomainValidationError> {
    validate_name(name)?;
    validate(description.is_empty(), DESCRIPTION_REQUIRED)?;
    validate(
        char_len(description) < DESCRIPTION_MIN_LENGTH,
        DESCRIPTION_TOO_SHORT,
    )?;
    validate(*price < BigDecimal::zero(), INVALID_PRICE)?;
    validate(stock < STOCK_MIN, INVALID_STOCK)?;
    if let Some(image) = image {
        validate(char_len(image) > IMAGE_MAX_LENGTH, IMAGE_TOO_LONG)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn price(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn message_of(result: Result<(), DomainValidationError>) -> String {
        result.unwrap_err().message().to_string()
    }

    #[test]
    fn test_validate_passes_when_condition_false() {
        assert!(validate(false, "never shown").is_ok());
    }

    #[test]
    fn test_validate_carries_message_verbatim() {
        let err = validate(true, "Custom failure, exactly as given").unwrap_err();
        assert_eq!(err.message(), "Custom failure, exactly as given");
        assert_eq!(err.to_string(), "Custom failure, exactly as given");
    }

    #[test]
    fn test_valid_product_fields() {
        let result = validate_product_fields(
            "Caderno Espiral",
            "Caderno espiral com 100 folhas",
            &price("7.99"),
            50,
            Some("caderno-1.png"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_name_is_required() {
        let result = validate_product_fields("", "Caderno espiral", &price("7.99"), 50, None);
        assert_eq!(message_of(result), NAME_REQUIRED);
    }

    #[test]
    fn test_short_name() {
        let result = validate_product_fields("Ca", "Caderno espiral", &price("7.99"), 50, None);
        assert_eq!(message_of(result), NAME_TOO_SHORT);
    }

    #[test]
    fn test_empty_description_is_required() {
        let result = validate_product_fields("Caderno Espiral", "", &price("7.99"), 50, None);
        assert_eq!(message_of(result), DESCRIPTION_REQUIRED);
    }

    #[test]
    fn test_short_description() {
        let result = validate_product_fields("Caderno Espiral", "Cade", &price("7.99"), 50, None);
        assert_eq!(message_of(result), DESCRIPTION_TOO_SHORT);
    }

    #[test]
    fn test_negative_price() {
        let result =
            validate_product_fields("Caderno Espiral", "Caderno espiral", &price("-7.99"), 50, None);
        assert_eq!(message_of(result), INVALID_PRICE);
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let result =
            validate_product_fields("Caderno Espiral", "Caderno espiral", &price("0"), 1, None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_stock_below_minimum() {
        for stock in [0, -1, -2] {
            let result = validate_product_fields(
                "Caderno Espiral",
                "Caderno espiral",
                &price("7.99"),
                stock,
                None,
            );
            assert_eq!(message_of(result), INVALID_STOCK);
        }
    }

    #[test]
    fn test_long_image_name() {
        let image = "a".repeat(251);
        let result = validate_product_fields(
            "Caderno Espiral",
            "Caderno espiral",
            &price("7.99"),
            50,
            Some(&image),
        );
        assert_eq!(message_of(result), IMAGE_TOO_LONG);
    }

    #[test]
    fn test_image_boundaries() {
        let max = "a".repeat(250);
        for image in [None, Some(""), Some(max.as_str())] {
            let result = validate_product_fields(
                "Caderno Espiral",
                "Caderno espiral",
                &price("7.99"),
                50,
                image,
            );
            assert!(result.is_ok(), "image {:?} should be accepted", image.map(str::len));
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // three characters, six bytes
        assert!(validate_name("ção").is_ok());
    }

    #[test]
    fn test_first_violation_wins() {
        let image = "a".repeat(300);
        let result = validate_product_fields("", "", &price("-1"), 0, Some(&image));
        assert_eq!(message_of(result), NAME_REQUIRED);

        let result = validate_product_fields("Valid", "", &price("-1"), 0, Some(&image));
        assert_eq!(message_of(result), DESCRIPTION_REQUIRED);

        let result = validate_product_fields("Valid", "Valid text", &price("-1"), 0, Some(&image));
        assert_eq!(message_of(result), INVALID_PRICE);

        let result = validate_product_fields("Valid", "Valid text", &price("1"), 0, Some(&image));
        assert_eq!(message_of(result), INVALID_STOCK);
    }

    #[test]
    fn test_negative_id() {
        assert_eq!(message_of(validate_id(-1)), INVALID_ID);
        assert!(validate_id(0).is_ok());
    }

    proptest! {
        #[test]
        fn prop_valid_combinations_pass(
            name in "[a-zA-Z ]{3,100}",
            description in "[a-zA-Z0-9 ]{5,200}",
            cents in 0i64..10_000_000,
            stock in 1i32..=9999,
            image in proptest::option::of("[a-z0-9.-]{0,250}"),
        ) {
            let price = BigDecimal::new(cents.into(), 2);
            prop_assert!(
                validate_product_fields(&name, &description, &price, stock, image.as_deref()).is_ok()
            );
        }

        #[test]
        fn prop_short_name_reported_before_other_rules(
            name in "[a-z]{1,2}",
            stock in i32::MIN..1,
        ) {
            let result = validate_product_fields(&name, "", &price("-5"), stock, None);
            prop_assert_eq!(message_of(result), NAME_TOO_SHORT);
        }

        #[test]
        fn prop_stock_rule_precedes_image_rule(
            stock in i32::MIN..1,
            extra in 1usize..50,
        ) {
            let image = "x".repeat(IMAGE_MAX_LENGTH + extra);
            let result = validate_product_fields(
                "Valid name",
                "Valid description",
                &price("1.00"),
                stock,
                Some(&image),
            );
            prop_assert_eq!(message_of(result), INVALID_STOCK);
        }
    }
}
