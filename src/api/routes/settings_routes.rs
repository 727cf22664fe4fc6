//! Public settings route (e.g., /api/v1/settings)

use axum::{routing::get, Router};

use crate::api::controller::setting::SiteSettingsController;
use crate::app_state::AppState;

pub fn settings_routes() -> Router<AppState> {
    Router::new().route("/", get(SiteSettingsController::get_site_settings))
}
