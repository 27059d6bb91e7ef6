// HTTP API Error Types
use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use std::fmt;

use crate::database::manager::DatabaseError;
use crate::middleware::response::WebResponse;
use crate::services::category_service::ServiceError;

/// Every failure that can reach the HTTP boundary. This is the only place
/// where a failure kind is turned into a status code.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request, one rendered line per violated field rule
    ValidationError(String),

    // 401 Unauthorized
    Unauthorized,

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value placed in the envelope's `data` field
    pub fn data(&self) -> Option<&str> {
        match self {
            ApiError::NotFound(msg)
            | ApiError::ValidationError(msg)
            | ApiError::InternalServerError(msg) => Some(msg),
            ApiError::Unauthorized => None,
        }
    }

    pub fn to_envelope(&self) -> WebResponse<Option<&str>> {
        WebResponse::with_status(self.status_code(), self.data())
    }
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

// Classification: not-found first, then validation, everything else is a 500
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Validation(errors) => ApiError::ValidationError(errors.to_string()),
            ServiceError::Database(e) => e.into(),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::InternalServerError(rejection.body_text())
    }
}

// Malformed request bodies fall through to the 500 branch
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InternalServerError(format!("Failed to parse the request body as JSON: {}", err))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InternalServerError(rejection.body_text())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data() {
            Some(msg) => write!(f, "{}", msg),
            None => write!(f, "unauthorized"),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if self.status_code().is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        self.to_envelope().into_response()
    }
}
