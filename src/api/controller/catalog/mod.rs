use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

use crate::api::dto::catalog_dto::VehicleListQuery;
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::vehicle::vehicle_entity::VehicleEntity;
use crate::domain::catalog::dto::vehicle_create_request::VehicleCreateRequest;
use crate::domain::catalog::dto::vehicle_update_request::{
    VehicleStatusRequest, VehicleUpdateRequest,
};
use crate::errors::AppError;

pub struct VehicleController;

impl VehicleController {
    pub async fn list_vehicles(
        State(state): State<AppState>,
        Query(query): Query<VehicleListQuery>,
    ) -> Result<Json<ApiResponse<PaginatedResponse<VehicleEntity>>>, AppError> {
        to_json(state.catalog_service.list_vehicles(query).await)
    }

    pub async fn get_vehicle(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<VehicleEntity>>, AppError> {
        to_json(state.catalog_service.get_vehicle(id).await)
    }

    pub async fn create_vehicle(
        State(state): State<AppState>,
        Json(payload): Json<VehicleCreateRequest>,
    ) -> Result<Json<ApiResponse<VehicleEntity>>, AppError> {
        to_json(state.catalog_service.create_vehicle(payload).await)
    }

    pub async fn update_vehicle(
        State(state): State<AppState>,
        Path(id): Path<String>,
        Json(payload): Json<VehicleUpdateRequest>,
    ) -> Result<Json<ApiResponse<VehicleEntity>>, AppError> {
        to_json(state.catalog_service.update_vehicle(id, payload).await)
    }

    pub async fn set_vehicle_status(
        State(state): State<AppState>,
        Path(id): Path<String>,
        Json(payload): Json<VehicleStatusRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.catalog_service.set_vehicle_status(id, payload).await)
    }

    pub async fn delete_vehicle(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.catalog_service.delete_vehicle(id).await)
    }
}
