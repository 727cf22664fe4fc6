use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

use crate::api::dto::booking_dto::BookingListQuery;
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::booking::booking_entity::BookingEntity;
use crate::domain::booking::dto::booking_create_request::{
    BookingCreateRequest, BookingStatusRequest,
};
use crate::errors::AppError;

pub struct BookingController;

impl BookingController {
    pub async fn create_booking(
        State(state): State<AppState>,
        Json(payload): Json<BookingCreateRequest>,
    ) -> Result<Json<ApiResponse<BookingEntity>>, AppError> {
        to_json(state.booking_service.create_booking(payload).await)
    }

    pub async fn list_bookings(
        State(state): State<AppState>,
        Query(query): Query<BookingListQuery>,
    ) -> Result<Json<ApiResponse<PaginatedResponse<BookingEntity>>>, AppError> {
        to_json(state.booking_service.list_bookings(query).await)
    }

    pub async fn get_booking(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<BookingEntity>>, AppError> {
        to_json(state.booking_service.get_booking(id).await)
    }

    pub async fn set_booking_status(
        State(state): State<AppState>,
        Path(id): Path<String>,
        Json(payload): Json<BookingStatusRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.booking_service.set_booking_status(id, payload).await)
    }

    pub async fn delete_booking(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.booking_service.delete_booking(id).await)
    }
}
