//! Public inquiry routes (e.g., /api/v1/inquiries)

use axum::{routing::post, Router};

use crate::api::controller::inquiry::InquiryController;
use crate::app_state::AppState;

pub fn inquiry_routes() -> Router<AppState> {
    Router::new().route("/", post(InquiryController::create_inquiry))
}
