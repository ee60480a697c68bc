//! Product request handlers.
//!
//! Mutations are forwarded to the product command dispatcher through
//! `ProductService`; listings filter by name before paging.

use crate::api::doc::PRODUCT_TAG;
use crate::api::dto::{ErrorResponse, PageQuery, PagedResponse, ProductRequest, ProductResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn product_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_products))
        .routes(routes!(create_product))
        .routes(routes!(list_all_products))
        .routes(routes!(get_product))
        .routes(routes!(update_product))
        .routes(routes!(delete_product))
}

/// GET /api/products - One page of products, optionally filtered by name
#[utoipa::path(
    get,
    path = "/",
    tag = PRODUCT_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Requested page of products", body = PagedResponse<ProductResponse>),
        (status = 400, description = "Page out of range or invalid page size", body = ErrorResponse)
    )
)]
async fn list_products(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> AppResult<Json<PagedResponse<ProductResponse>>> {
    let page_size = query.page_size(&state.pagination)?;
    let page = state
        .services
        .products
        .get_page(query.page, page_size, query.filter())
        .await?;
    Ok(Json(PagedResponse::from_list(page)))
}

/// GET /api/products/all - Every product, unpaged
#[utoipa::path(
    get,
    path = "/all",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products ordered by id", body = Vec<ProductResponse>)
    )
)]
async fn list_all_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = state.services.products.get_all().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// POST /api/products - Create a product
#[utoipa::path(
    post,
    path = "/",
    tag = PRODUCT_TAG,
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Field violates a product rule or category does not exist", body = ErrorResponse)
    )
)]
async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ProductRequest>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let product = state.services.products.create(req.into_fields()).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// GET /api/products/{id} - Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.services.products.get_by_id(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// PUT /api/products/{id} - Replace every field of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Field violates a product rule", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<ProductRequest>,
) -> AppResult<Json<ProductResponse>> {
    let product = state
        .services
        .products
        .update(id, req.into_fields())
        .await?;
    Ok(Json(ProductResponse::from(product)))
}

/// DELETE /api/products/{id} - Remove a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Removed product", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.services.products.remove(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaginationConfig;
    use crate::domain::validation::{INVALID_PRICE, INVALID_STOCK};
    use crate::error::AppError;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    async fn state_with_category() -> (AppState, i32) {
        let state = AppState::in_memory(PaginationConfig::default());
        let category = state
            .services
            .categories
            .create("Material Escolar".to_string())
            .await
            .unwrap();
        (state, category.id())
    }

    fn request(name: &str, category_id: i32) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            description: "Produto de teste".to_string(),
            price: BigDecimal::from_str("12.50").unwrap(),
            stock: 10,
            image: Some("produto.png".to_string()),
            category_id,
        }
    }

    #[tokio::test]
    async fn test_create_returns_category_name() {
        let (state, category_id) = state_with_category().await;

        let (status, Json(created)) =
            create_product(State(state), ValidatedJson(request("Caderno", category_id)))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.category_id, category_id);
        assert_eq!(created.category_name.as_deref(), Some("Material Escolar"));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let (state, category_id) = state_with_category().await;

        let mut negative_price = request("Caderno", category_id);
        negative_price.price = BigDecimal::from(-1);
        let error = create_product(State(state.clone()), ValidatedJson(negative_price))
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), INVALID_PRICE);

        let mut no_stock = request("Caderno", category_id);
        no_stock.stock = 0;
        let error = create_product(State(state), ValidatedJson(no_stock))
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), INVALID_STOCK);
    }

    #[tokio::test]
    async fn test_create_with_unknown_category() {
        let (state, _) = state_with_category().await;

        let error = create_product(State(state), ValidatedJson(request("Caderno", 999)))
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::Validation { field, .. } if field == "category_id"));
    }

    #[tokio::test]
    async fn test_filtered_page() {
        let (state, category_id) = state_with_category().await;
        for name in ["Caneta Azul", "Lapis", "Caneta Preta", "Borracha"] {
            let _created =
                create_product(State(state.clone()), ValidatedJson(request(name, category_id)))
                    .await
                    .unwrap();
        }

        let query = PageQuery {
            page: 1,
            page_size: Some(1),
            filter: Some("caneta".to_string()),
        };
        let Json(page) = list_products(State(state), ValidatedQuery(query)).await.unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "Caneta Azul");
        assert_eq!(page.pagination.total_items, 2);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let (state, category_id) = state_with_category().await;

        let error = update_product(
            State(state),
            Path(42),
            ValidatedJson(request("Caderno", category_id)),
        )
        .await
        .unwrap_err();

        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_then_delete() {
        let (state, category_id) = state_with_category().await;
        let (_, Json(created)) =
            create_product(State(state.clone()), ValidatedJson(request("Caderno", category_id)))
                .await
                .unwrap();

        let mut changed = request("Caderno Grande", category_id);
        changed.stock = 3;
        let Json(updated) = update_product(State(state.clone()), Path(created.id), ValidatedJson(changed))
            .await
            .unwrap();
        assert_eq!(updated.name, "Caderno Grande");
        assert_eq!(updated.stock, 3);

        let Json(removed) = delete_product(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        assert_eq!(removed.id, created.id);

        let Json(all) = list_all_products(State(state)).await.unwrap();
        assert!(all.is_empty());
    }
}
