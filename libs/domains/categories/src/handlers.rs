use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{ApiResponse, IdPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CategoryResult;
use crate::models::{Category, CategoryRequest};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

const TAG: &str = "categories";

/// OpenAPI documentation for the Categories API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        create_category,
        get_category,
        update_category,
        delete_category,
    ),
    components(schemas(Category, CategoryRequest)),
    tags(
        (name = TAG, description = "Menu category management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the category router with all HTTP endpoints
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .with_state(shared_service)
}

/// List all categories ordered by display order
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
) -> CategoryResult<impl IntoResponse> {
    let categories = service.list_categories().await?;
    Ok(Json(ApiResponse::success(categories)))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation failure or duplicate name"),
        (status = 500, description = "Internal server error")
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ValidatedJson(input): ValidatedJson<CategoryRequest>,
) -> CategoryResult<impl IntoResponse> {
    let category = service.create_category(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Category created", category)),
    ))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn get_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    IdPath(id): IdPath,
) -> CategoryResult<impl IntoResponse> {
    let category = service.get_category(id).await?;
    Ok(Json(ApiResponse::success(category)))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, description = "Validation failure or duplicate name"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<CategoryRequest>,
) -> CategoryResult<impl IntoResponse> {
    let category = service.update_category(id, input).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Category updated",
        category,
    )))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    IdPath(id): IdPath,
) -> CategoryResult<impl IntoResponse> {
    service.delete_category(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Category deleted",
        (),
    )))
}
