use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, rejection::PathRejection, Path, State},
};

use crate::api::category::{CategoryRequest, CategoryResponse};
use crate::error::ApiError;
use crate::middleware::response::{ApiResult, WebResponse};
use crate::routes::AppState;

/// POST /api/categories - Create a category
pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<CategoryResponse> {
    let request = decode_request(&body?)?;
    let category = state.categories.create(request).await?;
    Ok(WebResponse::ok(category))
}

/// PUT /api/categories/:id - Rename a category
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<CategoryResponse> {
    let Path(id) = id?;
    let request = decode_request(&body?)?;
    let category = state.categories.update(id, request).await?;
    Ok(WebResponse::ok(category))
}

/// DELETE /api/categories/:id - Delete a category
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<()> {
    let Path(id) = id?;
    state.categories.delete(id).await?;
    Ok(WebResponse::empty())
}

/// GET /api/categories/:id - Get a single category
pub async fn find_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<CategoryResponse> {
    let Path(id) = id?;
    let category = state.categories.find_by_id(id).await?;
    Ok(WebResponse::ok(category))
}

/// GET /api/categories - List all categories
pub async fn find_all(State(state): State<AppState>) -> ApiResult<Vec<CategoryResponse>> {
    let categories = state.categories.find_all().await?;
    Ok(WebResponse::ok(categories))
}

/// Decode a `CategoryRequest` from the raw body, whatever its `Content-Type`
fn decode_request(body: &[u8]) -> Result<CategoryRequest, ApiError> {
    Ok(serde_json::from_slice(body)?)
}
