//! Public catalog routes (e.g., /api/v1/catalog/*)

use axum::{routing::get, Router};

use crate::api::controller::catalog::VehicleController;
use crate::app_state::AppState;

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(VehicleController::list_vehicles))
        .route("/vehicles/{id}", get(VehicleController::get_vehicle))
}
