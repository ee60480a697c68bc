//! Category request handlers.

use crate::api::doc::CATEGORY_TAG;
use crate::api::dto::{CategoryRequest, CategoryResponse, ErrorResponse, PageQuery, PagedResponse};
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

pub fn category_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_categories))
        .routes(routes!(create_category))
        .routes(routes!(list_all_categories))
        .routes(routes!(get_category))
        .routes(routes!(update_category))
        .routes(routes!(delete_category))
}

/// GET /api/categories - One page of categories, optionally filtered by name
#[utoipa::path(
    get,
    path = "/",
    tag = CATEGORY_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Requested page of categories", body = PagedResponse<CategoryResponse>),
        (status = 400, description = "Page out of range or invalid page size", body = ErrorResponse)
    )
)]
async fn list_categories(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> AppResult<Json<PagedResponse<CategoryResponse>>> {
    let page_size = query.page_size(&state.pagination)?;
    let page = state
        .services
        .categories
        .get_page(query.page, page_size, query.filter())
        .await?;
    Ok(Json(PagedResponse::from_list(page)))
}

/// GET /api/categories/all - Every category, unpaged
#[utoipa::path(
    get,
    path = "/all",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories ordered by id", body = Vec<CategoryResponse>)
    )
)]
async fn list_all_categories(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryResponse>>> {
    let categories = state.services.categories.get_all().await?;
    Ok(Json(categories.into_iter().map(CategoryResponse::from).collect()))
}

/// POST /api/categories - Create a category
#[utoipa::path(
    post,
    path = "/",
    tag = CATEGORY_TAG,
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Name violates a category rule", body = ErrorResponse)
    )
)]
async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    let category = state.services.categories.create(req.name).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

/// GET /api/categories/{id} - Get a category by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state.services.categories.get_by_id(id).await?;
    Ok(Json(CategoryResponse::from(category)))
}

/// PUT /api/categories/{id} - Rename a category
#[utoipa::path(
    put,
    path = "/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Name violates a category rule", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CategoryRequest>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state.services.categories.update(id, req.name).await?;
    Ok(Json(CategoryResponse::from(category)))
}

/// DELETE /api/categories/{id} - Remove a category no product references
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Removed category", body = CategoryResponse),
        (status = 400, description = "Category is still referenced by products", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CategoryResponse>> {
    let category = state.services.categories.remove(id).await?;
    Ok(Json(CategoryResponse::from(category)))
}
