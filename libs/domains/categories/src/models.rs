use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Custom validator rejecting empty or whitespace-only names
pub(crate) fn validate_not_blank(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        let mut error = validator::ValidationError::new("not_blank");
        error.message = Some("Name must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Category entity - a named grouping for menu items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: i64,
    /// Category name (unique across all categories)
    pub name: String,
    /// Manual sort position for menu listings
    pub display_order: i32,
}

/// DTO for creating or updating a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 50, message = "Name must not exceed 50 characters")
    )]
    pub name: String,
    /// Defaults to 0 when absent
    #[serde(default)]
    pub display_order: i32,
}

impl CategoryRequest {
    /// Returns the request with the name trimmed of surrounding whitespace.
    ///
    /// Uniqueness checks and persistence both operate on the trimmed name, so
    /// `" Pho "` and `"Pho"` are the same category.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }
}
