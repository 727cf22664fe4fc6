use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::dto::vehicle_update_request::VehicleUpdateRequest;

use super::vehicle_status::VehicleStatus;

/// One inventory vehicle.
///
/// Stored at: `data/vehicles/{id}/info.rci`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleEntity {
    /// Record id (uuid v4, assigned on create).
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    /// Asking price in whole currency units.
    pub price: u64,
    pub mileage_km: u32,
    /// Fuel type, free text (petrol, diesel, electric, hybrid).
    pub fuel: Option<String>,
    /// Gearbox, free text (manual, automatic).
    pub gearbox: Option<String>,
    pub body_style: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    /// Public paths of uploaded photos, listing order.
    pub photo_urls: Vec<String>,
    pub status: VehicleStatus,
    /// Pinned to the landing page.
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VehicleEntity {
    pub fn apply_update(&mut self, req: VehicleUpdateRequest) {
        if let Some(v) = req.make {
            self.make = v;
        }
        if let Some(v) = req.model {
            self.model = v;
        }
        if let Some(v) = req.year {
            self.year = v;
        }
        if let Some(v) = req.price {
            self.price = v;
        }
        if let Some(v) = req.mileage_km {
            self.mileage_km = v;
        }
        if let Some(v) = req.fuel {
            self.fuel = normalize_string(v);
        }
        if let Some(v) = req.gearbox {
            self.gearbox = normalize_string(v);
        }
        if let Some(v) = req.body_style {
            self.body_style = normalize_string(v);
        }
        if let Some(v) = req.color {
            self.color = normalize_string(v);
        }
        if let Some(v) = req.description {
            self.description = normalize_string(v);
        }
        if let Some(v) = req.photo_urls {
            self.photo_urls = sanitize_photo_urls(v);
        }
        if let Some(v) = req.status {
            self.status = v;
        }
        if let Some(v) = req.featured {
            self.featured = v;
        }

        self.updated_at = Utc::now();
    }
}

fn normalize_string(v: String) -> Option<String> {
    let s = v.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Photo URLs are stored comma-separated, so an entry containing the
/// separator would split into bogus entries on the next read. Such entries
/// are dropped.
pub fn sanitize_photo_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty() && !u.contains(','))
        .collect()
}
