//! Catalog domain: entities and the invariants they enforce.

mod category;
mod product;
pub mod validation;

pub use category::Category;
pub use product::{Product, ProductFields};
pub use validation::DomainValidationError;

/// Display name used when filtering listings.
pub trait Named {
    fn name(&self) -> &str;
}
