use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Expected value of the shared-secret header
#[derive(Clone, Debug)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Arc::from(key.into()))
    }

    fn matches(&self, presented: &str) -> bool {
        presented == &*self.0
    }
}

/// Lets a request through iff `X-API-KEY` equals the configured key; anything
/// else is answered with a 401 envelope before routing happens.
pub async fn api_key_middleware(
    State(expected): State<ApiKey>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    match extract_api_key(&headers) {
        Some(presented) if expected.matches(presented) => {
            tracing::debug!("API key accepted for {} {}", request.method(), request.uri().path());
            next.run(request).await
        }
        _ => {
            tracing::warn!(
                "Rejected {} {}: missing or invalid {} header",
                request.method(),
                request.uri().path(),
                API_KEY_HEADER
            );
            ApiError::Unauthorized.into_response()
        }
    }
}

fn extract_api_key(headers: &HeaderMap) -> Option<&str> {
    headers.get(API_KEY_HEADER)?.to_str().ok()
}
