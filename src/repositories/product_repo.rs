//! Product repository for async database operations.
//!
//! Products are read with a left join on categories so the association used
//! for display is populated.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::domain::{Category, Product};
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{CategoryRow, NewProductRow, ProductChangeset, ProductRow};
use crate::repositories::ProductRepository;
use crate::schema::{categories, products};

/// Product repository holding an async connection pool.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: AsyncDbPool,
}

impl PgProductRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    async fn load_category(
        conn: &mut AsyncPgConnection,
        category_id: i32,
    ) -> AppResult<Option<CategoryRow>> {
        categories::table
            .find(category_id)
            .select(CategoryRow::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "find category"))
    }
}

fn hydrate((row, category): (ProductRow, Option<CategoryRow>)) -> AppResult<Product> {
    let category = category.map(Category::try_from).transpose()?;
    Ok(Product::try_from(row)?.with_category(category))
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let mut conn = self.pool.get().await?;

        let rows = products::table
            .left_join(categories::table)
            .select((ProductRow::as_select(), Option::<CategoryRow>::as_select()))
            .order(products::id.asc())
            .load::<(ProductRow, Option<CategoryRow>)>(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "list products"))?;

        rows.into_iter().map(hydrate).collect()
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let mut conn = self.pool.get().await?;

        let row = products::table
            .left_join(categories::table)
            .filter(products::id.eq(id))
            .select((ProductRow::as_select(), Option::<CategoryRow>::as_select()))
            .first::<(ProductRow, Option<CategoryRow>)>(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "find product"))?;

        row.map(hydrate).transpose()
    }

    async fn create(&self, product: Product) -> AppResult<Product> {
        let mut conn = self.pool.get().await?;

        let row = diesel::insert_into(products::table)
            .values(NewProductRow::from(&product))
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert product"))?;

        let category = Self::load_category(&mut conn, row.category_id).await?;
        hydrate((row, category))
    }

    async fn update(&self, product: Product) -> AppResult<Product> {
        let mut conn = self.pool.get().await?;

        let row = diesel::update(products::table.find(product.id()))
            .set(ProductChangeset::from(&product))
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update product"))?
            .ok_or_else(|| AppError::not_found("product", product.id()))?;

        let category = Self::load_category(&mut conn, row.category_id).await?;
        hydrate((row, category))
    }

    async fn remove(&self, product: Product) -> AppResult<Product> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(products::table.find(product.id()))
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete product"))?;

        if deleted == 0 {
            return Err(AppError::not_found("product", product.id()));
        }
        Ok(product)
    }
}
