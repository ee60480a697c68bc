//! Product mutation commands.
//!
//! Every product mutation is expressed as a [`ProductCommand`] and routed
//! through [`ProductCommandDispatcher`], which loads the current state,
//! applies the change through the entity and persists the result. Each
//! dispatch runs in its own span, so the log doubles as an audit trail.

use std::sync::Arc;

use tracing::Instrument;

use crate::domain::{Product, ProductFields};
use crate::error::{AppError, AppResult};
use crate::repositories::ProductRepository;

/// A requested product mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductCommand {
    Create(ProductFields),
    Update { id: i32, fields: ProductFields },
    Remove { id: i32 },
}

impl ProductCommand {
    /// Short name used in spans and logs.
    pub fn name(&self) -> &'static str {
        match self {
            ProductCommand::Create(_) => "create",
            ProductCommand::Update { .. } => "update",
            ProductCommand::Remove { .. } => "remove",
        }
    }

    fn target_id(&self) -> Option<i32> {
        match self {
            ProductCommand::Create(_) => None,
            ProductCommand::Update { id, .. } | ProductCommand::Remove { id } => Some(*id),
        }
    }
}

#[derive(Clone)]
pub struct ProductCommandDispatcher {
    repo: Arc<dyn ProductRepository>,
}

impl ProductCommandDispatcher {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Runs a command to completion.
    ///
    /// Update and Remove load the product first and fail with `NotFound` when
    /// it does not exist. Nothing is persisted when validation fails.
    ///
    /// # Returns
    /// The created, updated or removed product
    pub async fn dispatch(&self, command: ProductCommand) -> AppResult<Product> {
        let span = tracing::info_span!(
            "product_command",
            command = command.name(),
            product_id = ?command.target_id()
        );

        async move {
            let result = match command {
                ProductCommand::Create(fields) => self.create(fields).await,
                ProductCommand::Update { id, fields } => self.update(id, fields).await,
                ProductCommand::Remove { id } => self.remove(id).await,
            };

            match &result {
                Ok(product) => tracing::info!(product_id = product.id(), "Product command applied"),
                Err(e) => tracing::warn!(error = %e, "Product command rejected"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn create(&self, fields: ProductFields) -> AppResult<Product> {
        let product = Product::new(fields)?;
        self.repo.create(product).await
    }

    async fn update(&self, id: i32, fields: ProductFields) -> AppResult<Product> {
        let mut product = self.load(id).await?;
        product.update(fields)?;
        self.repo.update(product).await
    }

    async fn remove(&self, id: i32) -> AppResult<Product> {
        let product = self.load(id).await?;
        self.repo.remove(product).await
    }

    async fn load(&self, id: i32) -> AppResult<Product> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("product", id))
    }
}
