use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::persistence::vehicle::vehicle_status::VehicleStatus;

/// Partial update payload for an inventory vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VehicleUpdateRequest {
    #[validate(length(min = 1, max = 64))]
    pub make: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub model: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<u16>,
    #[validate(range(min = 1))]
    pub price: Option<u64>,
    pub mileage_km: Option<u32>,
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

/// Status-only patch, used by the back office to mark cars reserved/sold.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VehicleStatusRequest {
    pub status: VehicleStatus,
}
