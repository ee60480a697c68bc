use utoipa::OpenApi;

pub const CATEGORY_TAG: &str = "Categories";
pub const PRODUCT_TAG: &str = "Products";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog",
        description = "Product and category management with paged, filterable listings",
    ),
    components(schemas(crate::api::dto::ErrorResponse)),
    tags(
        (name = CATEGORY_TAG, description = "Category management endpoints"),
        (name = PRODUCT_TAG, description = "Product management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
