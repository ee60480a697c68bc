use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::domain::{DomainValidationError, Product, ProductFields};

/// `products.price` is `NUMERIC(10, 2)`.
pub const PRICE_INTEGER_DIGITS: u32 = 8;
pub const PRICE_SCALE: i64 = 2;
pub const PRICE_OUT_OF_RANGE: &str = "Price must have at most 8 integer digits and 2 decimals";

/// True when `price` is stored without rounding or overflow.
pub fn price_fits_column(price: &BigDecimal) -> bool {
    let (_, scale) = price.normalized().as_bigint_and_exponent();
    scale <= PRICE_SCALE && price.abs() < BigDecimal::from(10_i64.pow(PRICE_INTEGER_DIGITS))
}

/// Product row for SELECT operations
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub image: Option<String>,
    pub category_id: i32,
}

/// Product insert model
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProductRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: &'a BigDecimal,
    pub stock: i32,
    pub image: Option<&'a str>,
    pub category_id: i32,
}

/// Product update model. A missing image clears the column.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductChangeset<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: &'a BigDecimal,
    pub stock: i32,
    pub image: Option<&'a str>,
    pub category_id: i32,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainValidationError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Product::with_id(
            row.id,
            ProductFields {
                name: row.name,
                description: row.description,
                price: row.price,
                stock: row.stock,
                image: row.image,
                category_id: row.category_id,
            },
        )
    }
}

impl<'a> From<&'a Product> for NewProductRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: product.name(),
            description: product.description(),
            price: product.price(),
            stock: product.stock(),
            image: product.image(),
            category_id: product.category_id(),
        }
    }
}

impl<'a> From<&'a Product> for ProductChangeset<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: product.name(),
            description: product.description(),
            price: product.price(),
            stock: product.stock(),
            image: product.image(),
            category_id: product.category_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn fits(price: &str) -> bool {
        price_fits_column(&BigDecimal::from_str(price).unwrap())
    }

    #[test]
    fn test_price_column_bounds() {
        assert!(fits("0"));
        assert!(fits("24.90"));
        assert!(fits("24.900"));
        assert!(fits("99999999.99"));
        assert!(!fits("100000000"));
        assert!(!fits("1.005"));
        assert!(!fits("123456789012.345"));
    }
}
