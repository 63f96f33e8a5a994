use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Custom validator rejecting empty or whitespace-only names
fn validate_not_blank(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        let mut error = validator::ValidationError::new("not_blank");
        error.message = Some("Name must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// MenuItem entity - a sellable dish belonging to exactly one category
///
/// `category_name` is denormalized into the response from the referenced
/// category; it is never stored on the item itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier
    pub id: i64,
    /// Dish name
    pub name: String,
    /// Price in the smallest currency unit
    pub price: i64,
    /// Referenced category id
    pub category_id: i64,
    /// Name of the referenced category
    pub category_name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Whether the dish can currently be ordered
    pub available: bool,
}

/// DTO for creating or updating a menu item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRequest {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, message = "Name must not exceed 100 characters")
    )]
    pub name: String,
    #[validate(range(min = 0, message = "Price must be at least 0"))]
    pub price: i64,
    pub category_id: i64,
    #[validate(length(max = 255, message = "Description must not exceed 255 characters"))]
    pub description: Option<String>,
    /// Defaults to true on create; left unchanged on update when absent
    pub available: Option<bool>,
}

/// Fully-resolved write model handed to repositories.
///
/// The service applies trimming, the `available` default, and the category
/// referential check before building one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemWrite {
    pub name: String,
    pub price: i64,
    pub category_id: i64,
    pub description: Option<String>,
    pub available: bool,
}

impl MenuItemWrite {
    /// Build a write model from a request, trimming the name and resolving
    /// the availability flag against the given fallback.
    pub fn from_request(input: MenuItemRequest, available_fallback: bool) -> Self {
        Self {
            name: input.name.trim().to_string(),
            price: input.price,
            category_id: input.category_id,
            description: input.description,
            available: input.available.unwrap_or(available_fallback),
        }
    }
}

/// Query filters for listing menu items; all predicates are optional and
/// combined with logical AND
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemFilter {
    /// Only items in this category
    pub category_id: Option<i64>,
    /// Only items with this availability
    pub available: Option<bool>,
    /// Case-insensitive substring match on the item name
    pub keyword: Option<String>,
}
