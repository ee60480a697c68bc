//! In-process catalog storage.
//!
//! Both repositories share one table set behind a tokio `RwLock`, so the
//! category reference checks behave like the relational store: an unknown
//! `category_id` is rejected and a category cannot be removed while products
//! still point at it.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Category, Product};
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{PRICE_OUT_OF_RANGE, price_fits_column};
use crate::repositories::{CategoryRepository, ProductRepository};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    products: BTreeMap<i32, Product>,
    category_seq: i32,
    product_seq: i32,
}

impl Tables {
    fn check_category_reference(&self, category_id: i32) -> AppResult<()> {
        if self.categories.contains_key(&category_id) {
            Ok(())
        } else {
            Err(DatabaseErrorConverter::invalid_reference(
                "category_id",
                "categories",
                &category_id.to_string(),
            ))
        }
    }

    fn check_price_column(product: &Product) -> AppResult<()> {
        if price_fits_column(product.price()) {
            Ok(())
        } else {
            Err(AppError::Validation {
                field: "price".to_string(),
                reason: PRICE_OUT_OF_RANGE.to_string(),
            })
        }
    }

    fn hydrate(&self, product: &Product) -> Product {
        let category = self.categories.get(&product.category_id()).cloned();
        product.clone().with_category(category)
    }
}

/// Shared in-memory tables. Cloning shares the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> MemoryProductRepository {
        MemoryProductRepository {
            catalog: self.clone(),
        }
    }

    pub fn categories(&self) -> MemoryCategoryRepository {
        MemoryCategoryRepository {
            catalog: self.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryProductRepository {
    catalog: MemoryCatalog,
}

#[derive(Debug, Clone)]
pub struct MemoryCategoryRepository {
    catalog: MemoryCatalog,
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let tables = self.catalog.tables.read().await;
        Ok(tables.products.values().map(|p| tables.hydrate(p)).collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let tables = self.catalog.tables.read().await;
        Ok(tables.products.get(&id).map(|p| tables.hydrate(p)))
    }

    async fn create(&self, mut product: Product) -> AppResult<Product> {
        let mut tables = self.catalog.tables.write().await;
        Tables::check_price_column(&product)?;
        tables.check_category_reference(product.category_id())?;

        tables.product_seq += 1;
        product.assign_id(tables.product_seq);
        let stored = product.with_category(None);
        let created = tables.hydrate(&stored);
        tables.products.insert(stored.id(), stored);
        Ok(created)
    }

    async fn update(&self, product: Product) -> AppResult<Product> {
        let mut tables = self.catalog.tables.write().await;
        if !tables.products.contains_key(&product.id()) {
            return Err(AppError::not_found("product", product.id()));
        }
        Tables::check_price_column(&product)?;
        tables.check_category_reference(product.category_id())?;

        let stored = product.with_category(None);
        let updated = tables.hydrate(&stored);
        tables.products.insert(stored.id(), stored);
        Ok(updated)
    }

    async fn remove(&self, product: Product) -> AppResult<Product> {
        let mut tables = self.catalog.tables.write().await;
        let id = product.id();
        tables
            .products
            .remove(&id)
            .map(|_| product)
            .ok_or_else(|| AppError::not_found("product", id))
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn list(&self) -> AppResult<Vec<Category>> {
        let tables = self.catalog.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        let tables = self.catalog.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn create(&self, mut category: Category) -> AppResult<Category> {
        let mut tables = self.catalog.tables.write().await;
        tables.category_seq += 1;
        category.assign_id(tables.category_seq);
        tables.categories.insert(category.id(), category.clone());
        Ok(category)
    }

    async fn update(&self, category: Category) -> AppResult<Category> {
        let mut tables = self.catalog.tables.write().await;
        match tables.categories.get_mut(&category.id()) {
            Some(slot) => {
                *slot = category.clone();
                Ok(category)
            }
            None => Err(AppError::not_found("category", category.id())),
        }
    }

    async fn remove(&self, category: Category) -> AppResult<Category> {
        let mut tables = self.catalog.tables.write().await;
        let id = category.id();
        if tables.products.values().any(|p| p.category_id() == id) {
            return Err(DatabaseErrorConverter::still_referenced(
                "id",
                &id.to_string(),
                "products",
            ));
        }
        tables
            .categories
            .remove(&id)
            .map(|_| category)
            .ok_or_else(|| AppError::not_found("category", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductFields;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn fields(name: &str, category_id: i32) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            description: "Descricao do produto".to_string(),
            price: BigDecimal::from_str("12.50").unwrap(),
            stock: 10,
            image: Some("lapis.png".to_string()),
            category_id,
        }
    }

    async fn seeded() -> (MemoryCatalog, Category) {
        let catalog = MemoryCatalog::new();
        let category = catalog
            .categories()
            .create(Category::new("Material Escolar").unwrap())
            .await
            .unwrap();
        (catalog, category)
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let (catalog, category) = seeded().await;
        let repo = catalog.products();

        let first = repo
            .create(Product::new(fields("Lapis", category.id())).unwrap())
            .await
            .unwrap();
        let second = repo
            .create(Product::new(fields("Caneta", category.id())).unwrap())
            .await
            .unwrap();

        assert_eq!(category.id(), 1);
        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
    }

    #[tokio::test]
    async fn test_price_must_fit_column() {
        let (catalog, category) = seeded().await;
        let repo = catalog.products();

        let mut oversized = fields("Lapis", category.id());
        oversized.price = BigDecimal::from_str("123456789012.345").unwrap();
        let error = repo
            .create(Product::new(oversized).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::Validation { ref field, .. } if field == "price"));

        let mut created = repo
            .create(Product::new(fields("Lapis", category.id())).unwrap())
            .await
            .unwrap();
        let mut three_decimals = fields("Lapis", category.id());
        three_decimals.price = BigDecimal::from_str("1.005").unwrap();
        created.update(three_decimals).unwrap();
        let error = repo.update(created).await.unwrap_err();
        assert!(matches!(error, AppError::Validation { ref field, .. } if field == "price"));

        let stored = repo.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].price(), &BigDecimal::from_str("12.50").unwrap());
    }

    #[tokio::test]
    async fn test_reads_fill_category_association() {
        let (catalog, category) = seeded().await;
        let repo = catalog.products();
        let created = repo
            .create(Product::new(fields("Lapis", category.id())).unwrap())
            .await
            .unwrap();

        let loaded = repo.get_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(loaded.category().map(|c| c.name()), Some("Material Escolar"));
        assert_eq!(loaded.fields(), created.fields());
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected() {
        let (catalog, _) = seeded().await;

        let error = catalog
            .products()
            .create(Product::new(fields("Lapis", 99)).unwrap())
            .await
            .unwrap_err();

        match error {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "category_id");
                assert!(reason.contains("categories"));
            }
            other => panic!("Expected Validation error, got: {:?}", other),
        }
        assert!(catalog.products().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_referenced_category_cannot_be_removed() {
        let (catalog, category) = seeded().await;
        catalog
            .products()
            .create(Product::new(fields("Lapis", category.id())).unwrap())
            .await
            .unwrap();

        let error = catalog.categories().remove(category.clone()).await.unwrap_err();

        assert!(matches!(error, AppError::Validation { .. }), "got {:?}", error);
        assert!(catalog.categories().get_by_id(category.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let (catalog, category) = seeded().await;
        let repo = catalog.products();
        for name in ["Lapis", "Caneta", "Borracha"] {
            repo.create(Product::new(fields(name, category.id())).unwrap())
                .await
                .unwrap();
        }

        let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_and_remove_missing_rows() {
        let (catalog, category) = seeded().await;
        let ghost = Product::with_id(7, fields("Lapis", category.id())).unwrap();

        assert!(matches!(
            catalog.products().update(ghost.clone()).await,
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(
            catalog.products().remove(ghost).await,
            Err(AppError::NotFound { .. })
        ));
    }
}
