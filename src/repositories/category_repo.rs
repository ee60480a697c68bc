//! Category repository for async database operations.
//!
//! Provides CRUD operations for the categories table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::domain::Category;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{CategoryChangeset, CategoryRow, NewCategoryRow};
use crate::repositories::CategoryRepository;
use crate::schema::categories;

/// Category repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: AsyncDbPool,
}

impl PgCategoryRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> AppResult<Vec<Category>> {
        let mut conn = self.pool.get().await?;

        let rows = categories::table
            .select(CategoryRow::as_select())
            .order(categories::id.asc())
            .load(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "list categories"))?;

        rows.into_iter()
            .map(|row| Category::try_from(row).map_err(AppError::from))
            .collect()
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        let mut conn = self.pool.get().await?;

        let row = categories::table
            .find(id)
            .select(CategoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "find category"))?;

        Ok(row.map(Category::try_from).transpose()?)
    }

    async fn create(&self, category: Category) -> AppResult<Category> {
        let mut conn = self.pool.get().await?;

        let row = diesel::insert_into(categories::table)
            .values(NewCategoryRow::from(&category))
            .returning(CategoryRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert category"))?;

        Ok(Category::try_from(row)?)
    }

    async fn update(&self, category: Category) -> AppResult<Category> {
        let mut conn = self.pool.get().await?;

        let row = diesel::update(categories::table.find(category.id()))
            .set(CategoryChangeset::from(&category))
            .returning(CategoryRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update category"))?
            .ok_or_else(|| AppError::not_found("category", category.id()))?;

        Ok(Category::try_from(row)?)
    }

    async fn remove(&self, category: Category) -> AppResult<Category> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(categories::table.find(category.id()))
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete category"))?;

        if deleted == 0 {
            return Err(AppError::not_found("category", category.id()));
        }
        Ok(category)
    }
}
