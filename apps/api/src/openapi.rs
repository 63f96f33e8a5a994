//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Menu API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menu API",
        version = "0.1.0",
        description = "Restaurant management API: menu categories and menu items"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/categories", api = domain_categories::handlers::ApiDoc),
        (path = "/api/v1/menu-items", api = domain_menu_items::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
