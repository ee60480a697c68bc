//! Category service.
//!
//! Categories have no cross-entity side effects, so mutations call the
//! repository directly: load, mutate through the entity, persist.

use std::sync::Arc;

use crate::domain::Category;
use crate::error::{AppError, AppResult};
use crate::repositories::CategoryRepository;
use crate::utils::{PaginatedList, filter_by_name};

#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Returns one page of categories whose name contains `filter`.
    pub async fn get_page(
        &self,
        page: u32,
        page_size: u32,
        filter: Option<&str>,
    ) -> AppResult<PaginatedList<Category>> {
        let categories = filter_by_name(self.repo.list().await?, filter);
        Ok(PaginatedList::create(categories, page, page_size)?)
    }

    pub async fn get_all(&self) -> AppResult<Vec<Category>> {
        self.repo.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Category> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("category", id))
    }

    #[tracing::instrument(skip(self, name))]
    pub async fn create(&self, name: String) -> AppResult<Category> {
        let category = Category::new(name)?;
        let created = self.repo.create(category).await?;
        tracing::info!(category_id = created.id(), "Category created");
        Ok(created)
    }

    #[tracing::instrument(skip(self, name))]
    pub async fn update(&self, id: i32, name: String) -> AppResult<Category> {
        let mut category = self.get_by_id(id).await?;
        category.update(name)?;
        let updated = self.repo.update(category).await?;
        tracing::info!("Category updated");
        Ok(updated)
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: i32) -> AppResult<Category> {
        let category = self.get_by_id(id).await?;
        let removed = self.repo.remove(category).await?;
        tracing::info!("Category removed");
        Ok(removed)
    }
}
