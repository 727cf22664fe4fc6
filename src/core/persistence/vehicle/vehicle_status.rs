use serde::{Deserialize, Serialize};

/// Sales status of an inventory vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "reserved")]
    Reserved,
    #[serde(rename = "sold")]
    Sold,
}

impl VehicleStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "AVAILABLE",
            VehicleStatus::Reserved => "RESERVED",
            VehicleStatus::Sold => "SOLD",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "AVAILABLE" => Some(VehicleStatus::Available),
            "RESERVED" => Some(VehicleStatus::Reserved),
            "SOLD" => Some(VehicleStatus::Sold),
            _ => None,
        }
    }
}
