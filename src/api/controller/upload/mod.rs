use axum::extract::Multipart;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct UploadController;

impl UploadController {
    /// Accepts a multipart form with a `file` field. The raw stream reaches
    /// the multipart extractor unconsumed; body buffering skips multipart
    /// requests upstream.
    pub async fn upload_image(
        State(state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| AppError::BodyParsingError(err.to_string()))?
        {
            if field.name() != Some("file") {
                continue;
            }

            let original_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|err| AppError::BodyParsingError(err.to_string()))?;

            return to_json(
                state
                    .upload_service
                    .store_image(original_name, bytes.to_vec())
                    .await,
            );
        }

        Err(AppError::BodyParsingError(
            "Missing multipart field: file".into(),
        ))
    }
}
