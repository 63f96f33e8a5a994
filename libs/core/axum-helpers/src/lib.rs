//! # Axum Helpers
//!
//! Utilities and helpers shared by the HTTP-facing crates:
//!
//! - **[`response`]**: the uniform `{code, message, data}` response envelope
//! - **[`errors`]**: application error type translated to enveloped responses
//! - **[`extractors`]**: custom extractors (validated JSON, integer path ids)
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod response;
pub mod server;

// Re-export commonly used types
pub use errors::AppError;
pub use extractors::{IdPath, ValidatedJson};
pub use response::ApiResponse;
pub use server::{create_app, create_router, health_router, shutdown_signal};
