use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;

/// JSON error body returned by every API route.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(detail.into()))
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Unavailable(_) => {
                JsonApiError::new(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable", Some(e.to_string()))
            }
            ServiceError::BadInput(_) => JsonApiError::bad_request(e.to_string()),
            ServiceError::Db(_) => {
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Database Error", Some(e.to_string()))
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.error, detail: self.detail.as_deref() };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
