//! Storage contracts the services depend on.

use async_trait::async_trait;

use crate::domain::{Category, Product};
use crate::error::AppResult;

/// Product storage.
///
/// Listings are ordered by ascending id. Reads fill the category association
/// when the referenced category exists.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every stored product.
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Looks a product up by id. A missing row is `Ok(None)`.
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// Persists a new product and returns it with its assigned id.
    async fn create(&self, product: Product) -> AppResult<Product>;

    /// Overwrites every mutable column of an existing product.
    async fn update(&self, product: Product) -> AppResult<Product>;

    /// Deletes the product and hands it back.
    async fn remove(&self, product: Product) -> AppResult<Product>;
}

/// Category storage.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Category>>;

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Category>>;

    async fn create(&self, category: Category) -> AppResult<Category>;

    async fn update(&self, category: Category) -> AppResult<Category>;

    /// Fails while products still reference the category.
    async fn remove(&self, category: Category) -> AppResult<Category>;
}
