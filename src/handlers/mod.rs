// handlers/mod.rs - request controllers
//
// Handlers parse path and body, call the service, and wrap the result in the
// response envelope. Failures are returned as `ApiError` and rendered there.
pub mod category;
pub mod health;

pub use health::health;

use crate::error::ApiError;

/// Fallback for paths no route matches
pub async fn not_found() -> ApiError {
    ApiError::not_found("route not found")
}
