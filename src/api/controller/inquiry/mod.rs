use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

use crate::api::dto::inquiry_dto::InquiryListQuery;
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::inquiry::inquiry_entity::InquiryEntity;
use crate::domain::inquiry::dto::inquiry_create_request::{
    InquiryCreateRequest, InquiryReadRequest,
};
use crate::errors::AppError;

pub struct InquiryController;

impl InquiryController {
    pub async fn create_inquiry(
        State(state): State<AppState>,
        Json(payload): Json<InquiryCreateRequest>,
    ) -> Result<Json<ApiResponse<InquiryEntity>>, AppError> {
        to_json(state.inquiry_service.create_inquiry(payload).await)
    }

    pub async fn list_inquiries(
        State(state): State<AppState>,
        Query(query): Query<InquiryListQuery>,
    ) -> Result<Json<ApiResponse<PaginatedResponse<InquiryEntity>>>, AppError> {
        to_json(state.inquiry_service.list_inquiries(query).await)
    }

    pub async fn get_inquiry(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<InquiryEntity>>, AppError> {
        to_json(state.inquiry_service.get_inquiry(id).await)
    }

    pub async fn set_inquiry_read(
        State(state): State<AppState>,
        Path(id): Path<String>,
        Json(payload): Json<InquiryReadRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.inquiry_service.set_inquiry_read(id, payload).await)
    }

    pub async fn delete_inquiry(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.inquiry_service.delete_inquiry(id).await)
    }
}
