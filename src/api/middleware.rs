use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Gate for the `/api/v1/admin` subtree. Compares the `x-admin-token`
/// header against `SHOWROOM_ADMIN_TOKEN`; a missing env var closes the
/// admin area entirely.
pub async fn require_admin(request: Request, next: Next) -> Response {
    let expected = match std::env::var("SHOWROOM_ADMIN_TOKEN") {
        Ok(v) if !v.is_empty() => v,
        _ => {
            return AppError::Unauthorized("Admin area is not configured".into()).into_response()
        }
    };

    let provided = request
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(token) if token == expected => next.run(request).await,
        _ => AppError::Unauthorized("Invalid admin token".into()).into_response(),
    }
}
