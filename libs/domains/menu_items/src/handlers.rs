use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use axum_helpers::{ApiResponse, IdPath, ValidatedJson};
use domain_categories::repository::CategoryRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::MenuItemResult;
use crate::models::{MenuItem, MenuItemFilter, MenuItemRequest};
use crate::repository::MenuItemRepository;
use crate::service::MenuItemService;

const TAG: &str = "menu-items";

/// OpenAPI documentation for the Menu Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_menu_items,
        create_menu_item,
        get_menu_item,
        update_menu_item,
        toggle_availability,
        delete_menu_item,
    ),
    components(schemas(MenuItem, MenuItemRequest)),
    tags(
        (name = TAG, description = "Menu item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the menu item router with all HTTP endpoints
pub fn router<M, C>(service: MenuItemService<M, C>) -> Router
where
    M: MenuItemRepository + 'static,
    C: CategoryRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_menu_items).post(create_menu_item))
        .route(
            "/{id}",
            get(get_menu_item)
                .put(update_menu_item)
                .delete(delete_menu_item),
        )
        .route("/{id}/toggle-availability", patch(toggle_availability))
        .with_state(shared_service)
}

/// List menu items with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(MenuItemFilter),
    responses(
        (status = 200, description = "List of menu items", body = Vec<MenuItem>),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_menu_items<M: MenuItemRepository, C: CategoryRepository>(
    State(service): State<Arc<MenuItemService<M, C>>>,
    Query(filter): Query<MenuItemFilter>,
) -> MenuItemResult<impl IntoResponse> {
    let items = service.list_menu_items(filter).await?;
    Ok(Json(ApiResponse::success(items)))
}

/// Create a new menu item
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = MenuItemRequest,
    responses(
        (status = 201, description = "Menu item created", body = MenuItem),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Referenced category not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn create_menu_item<M: MenuItemRepository, C: CategoryRepository>(
    State(service): State<Arc<MenuItemService<M, C>>>,
    ValidatedJson(input): ValidatedJson<MenuItemRequest>,
) -> MenuItemResult<impl IntoResponse> {
    let item = service.create_menu_item(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Menu item created", item)),
    ))
}

/// Get a menu item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Menu item found", body = MenuItem),
        (status = 404, description = "Menu item not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn get_menu_item<M: MenuItemRepository, C: CategoryRepository>(
    State(service): State<Arc<MenuItemService<M, C>>>,
    IdPath(id): IdPath,
) -> MenuItemResult<impl IntoResponse> {
    let item = service.get_menu_item(id).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// Update a menu item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Menu item ID")
    ),
    request_body = MenuItemRequest,
    responses(
        (status = 200, description = "Menu item updated", body = MenuItem),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Menu item or referenced category not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_menu_item<M: MenuItemRepository, C: CategoryRepository>(
    State(service): State<Arc<MenuItemService<M, C>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<MenuItemRequest>,
) -> MenuItemResult<impl IntoResponse> {
    let item = service.update_menu_item(id, input).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Menu item updated",
        item,
    )))
}

/// Toggle the availability flag of a menu item
#[utoipa::path(
    patch,
    path = "/{id}/toggle-availability",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = MenuItem),
        (status = 404, description = "Menu item not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn toggle_availability<M: MenuItemRepository, C: CategoryRepository>(
    State(service): State<Arc<MenuItemService<M, C>>>,
    IdPath(id): IdPath,
) -> MenuItemResult<impl IntoResponse> {
    let item = service.toggle_availability(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Availability toggled",
        item,
    )))
}

/// Delete a menu item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Menu item deleted"),
        (status = 404, description = "Menu item not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_menu_item<M: MenuItemRepository, C: CategoryRepository>(
    State(service): State<Arc<MenuItemService<M, C>>>,
    IdPath(id): IdPath,
) -> MenuItemResult<impl IntoResponse> {
    service.delete_menu_item(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Menu item deleted",
        (),
    )))
}
