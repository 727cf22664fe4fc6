//! Back-office routes (e.g., /api/v1/admin/*), token-gated.

use axum::routing::{delete, get, patch, post, put};
use axum::{middleware, Router};

use crate::api::controller::booking::BookingController;
use crate::api::controller::catalog::VehicleController;
use crate::api::controller::inquiry::InquiryController;
use crate::api::controller::setting::SiteSettingsController;
use crate::api::controller::upload::UploadController;
use crate::api::middleware::require_admin;
use crate::app_state::AppState;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/vehicles", post(VehicleController::create_vehicle))
        .route("/vehicles/{id}", put(VehicleController::update_vehicle))
        .route(
            "/vehicles/{id}/status",
            patch(VehicleController::set_vehicle_status),
        )
        .route("/vehicles/{id}", delete(VehicleController::delete_vehicle))
        .route("/bookings", get(BookingController::list_bookings))
        .route("/bookings/{id}", get(BookingController::get_booking))
        .route(
            "/bookings/{id}/status",
            patch(BookingController::set_booking_status),
        )
        .route("/bookings/{id}", delete(BookingController::delete_booking))
        .route("/inquiries", get(InquiryController::list_inquiries))
        .route("/inquiries/{id}", get(InquiryController::get_inquiry))
        .route(
            "/inquiries/{id}/read",
            patch(InquiryController::set_inquiry_read),
        )
        .route("/inquiries/{id}", delete(InquiryController::delete_inquiry))
        .route("/settings", put(SiteSettingsController::upsert_site_settings))
        .route("/uploads", post(UploadController::upload_image))
        .layer(middleware::from_fn(require_admin))
}
