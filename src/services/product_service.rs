//! Product service: listings and the mutation entry points.

use std::sync::Arc;

use crate::domain::{Product, ProductFields};
use crate::error::{AppError, AppResult};
use crate::repositories::ProductRepository;
use crate::services::{ProductCommand, ProductCommandDispatcher};
use crate::utils::{PaginatedList, filter_by_name};

/// Product service.
///
/// Reads go straight to the repository, mutations are dispatched as
/// [`ProductCommand`]s. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
    dispatcher: ProductCommandDispatcher,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self {
            dispatcher: ProductCommandDispatcher::new(repo.clone()),
            repo,
        }
    }

    /// Returns one page of products whose name contains `filter`.
    ///
    /// Filtering happens before pagination, so the page count reflects the
    /// filtered set.
    ///
    /// # Errors
    /// `InvalidPage` when `page` is outside `1..=total_pages`, including any
    /// page of an empty result.
    pub async fn get_page(
        &self,
        page: u32,
        page_size: u32,
        filter: Option<&str>,
    ) -> AppResult<PaginatedList<Product>> {
        let products = filter_by_name(self.repo.list().await?, filter);
        Ok(PaginatedList::create(products, page, page_size)?)
    }

    pub async fn get_all(&self) -> AppResult<Vec<Product>> {
        self.repo.list().await
    }

    /// Gets a product by id, or `NotFound`.
    pub async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("product", id))
    }

    pub async fn create(&self, fields: ProductFields) -> AppResult<Product> {
        self.dispatcher.dispatch(ProductCommand::Create(fields)).await
    }

    pub async fn update(&self, id: i32, fields: ProductFields) -> AppResult<Product> {
        self.dispatcher
            .dispatch(ProductCommand::Update { id, fields })
            .await
    }

    pub async fn remove(&self, id: i32) -> AppResult<Product> {
        self.dispatcher.dispatch(ProductCommand::Remove { id }).await
    }
}
