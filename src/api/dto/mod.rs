//! API DTOs shared across controllers.

pub mod booking_dto;
pub mod catalog_dto;
pub mod inquiry_dto;
pub mod paginated_response;

use serde::Serialize;

/// Uniform success envelope for API responses.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: "ok",
            data,
        }
    }
}
