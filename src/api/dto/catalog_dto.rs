//! Catalog API DTOs

use serde::Deserialize;

use crate::core::persistence::vehicle::vehicle_status::VehicleStatus;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct VehicleListQuery {
    pub status: Option<VehicleStatus>,
    pub make: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}
