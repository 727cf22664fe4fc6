//! Public booking routes (e.g., /api/v1/bookings)

use axum::{routing::post, Router};

use crate::api::controller::booking::BookingController;
use crate::app_state::AppState;

pub fn booking_routes() -> Router<AppState> {
    Router::new().route("/", post(BookingController::create_booking))
}
