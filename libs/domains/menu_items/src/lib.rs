//! Menu Items Domain
//!
//! Sellable dishes. Every item belongs to exactly one category, carries a
//! price in the smallest currency unit, and an availability flag that can be
//! toggled independently of full updates.
//!
//! Follows the same handler → service → repository layering as the
//! categories domain; the service additionally depends on the category
//! repository to resolve the referenced category on every create and update.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_categories::repository::InMemoryCategoryRepository;
//! use domain_menu_items::{
//!     handlers,
//!     repository::InMemoryMenuItemRepository,
//!     service::MenuItemService,
//! };
//!
//! let categories = InMemoryCategoryRepository::new();
//! let repository = InMemoryMenuItemRepository::new(categories.clone());
//! let service = MenuItemService::new(repository, categories);
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{MenuItemError, MenuItemResult};
pub use models::{MenuItem, MenuItemFilter, MenuItemRequest, MenuItemWrite};
pub use postgres::PgMenuItemRepository;
pub use repository::{InMemoryMenuItemRepository, MenuItemRepository};
pub use service::MenuItemService;
