use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Uniform `{code, status, data}` body used for every response, errors included
#[derive(Debug, Clone, Serialize)]
pub struct WebResponse<T: Serialize> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

impl<T: Serialize> WebResponse<T> {
    /// Envelope for `status_code`, labelled with the upper-cased reason phrase
    /// ("NOT FOUND", "BAD REQUEST", ...)
    pub fn with_status(status_code: StatusCode, data: T) -> Self {
        Self {
            code: status_code.as_u16(),
            status: status_label(status_code),
            data,
        }
    }

    /// Create a successful API response with default 200 status
    pub fn ok(data: T) -> Self {
        Self::with_status(StatusCode::OK, data)
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl WebResponse<()> {
    /// 200 with `data: null`
    pub fn empty() -> Self {
        Self::ok(())
    }
}

pub fn status_label(status_code: StatusCode) -> String {
    status_code
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

pub type ApiResult<T> = Result<WebResponse<T>, crate::error::ApiError>;
