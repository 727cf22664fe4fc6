//! API route declarations (e.g., /api/v1/*)

pub mod admin_routes;
pub mod booking_routes;
pub mod catalog_routes;
pub mod inquiry_routes;
pub mod settings_routes;
pub mod system_routes;
