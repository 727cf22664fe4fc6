use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::settings::site_settings_entity::SiteSettingsEntity;
use crate::domain::settings::dto::site_settings_upsert_request::SiteSettingsUpsertRequest;
use crate::errors::AppError;

pub struct SiteSettingsController;

impl SiteSettingsController {
    pub async fn get_site_settings(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<SiteSettingsEntity>>, AppError> {
        to_json(state.settings_service.get_site_settings().await)
    }

    pub async fn upsert_site_settings(
        State(state): State<AppState>,
        Json(payload): Json<SiteSettingsUpsertRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.settings_service.upsert_site_settings(payload).await)
    }
}
