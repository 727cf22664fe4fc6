use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::core::persistence::record_fs_adapter_trait::RecordNotFound;
use crate::domain::upload::service::upload_service::UnsupportedUpload;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal Server Error")]
    InternalServerError(String),

    #[error("{0}")]
    BodyParsingError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),
}

/// Map an untyped error crossing the API boundary onto the typed hierarchy.
/// Known domain errors keep their status; everything else becomes a 500
/// whose detail is logged, not returned.
pub fn from_anyhow(err: anyhow::Error) -> AppError {
    if let Some(miss) = err.downcast_ref::<RecordNotFound>() {
        return AppError::NotFound(miss.to_string());
    }
    if let Some(rejected) = err.downcast_ref::<UnsupportedUpload>() {
        return AppError::BodyParsingError(rejected.to_string());
    }
    if let Some(invalid) = err.downcast_ref::<validator::ValidationErrors>() {
        return AppError::BodyParsingError(invalid.to_string());
    }
    AppError::InternalServerError(format!("{err:#}"))
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        // internal detail goes to the log, never the client
        if let AppError::InternalServerError(detail) = &self {
            tracing::error!(%detail, "Request failed");
        }

        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn record_miss_maps_to_not_found() {
        let err = anyhow::Error::from(RecordNotFound::new("Vehicle", "abc"));
        let mapped = from_anyhow(err);
        assert!(matches!(mapped, AppError::NotFound(_)));
        assert_eq!(mapped.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(mapped.to_string(), "Vehicle not found: abc");
    }

    #[test]
    fn unknown_error_renders_generic_message() {
        let mapped = from_anyhow(anyhow!("db connection refused"));
        assert_eq!(mapped.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(mapped.to_string(), "Internal Server Error");
    }
}
