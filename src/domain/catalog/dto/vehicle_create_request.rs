use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::persistence::vehicle::vehicle_status::VehicleStatus;

/// Create payload for an inventory vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VehicleCreateRequest {
    #[validate(length(min = 1, max = 64))]
    pub make: String,
    #[validate(length(min = 1, max = 64))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100))]
    pub year: u16,
    #[validate(range(min = 1))]
    pub price: u64,
    pub mileage_km: u32,
    pub fuel: Option<String>,
    pub gearbox: Option<String>,
    pub body_style: Option<String>,
    pub color: Option<String>,
    #[validate(length(max = 8192))]
    pub description: Option<String>,
    pub photo_urls: Option<Vec<String>>,
    pub status: Option<VehicleStatus>,
    pub featured: Option<bool>,
}
