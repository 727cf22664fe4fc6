use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::booking_status::BookingStatus;

/// One test-drive / viewing booking request.
///
/// Stored at: `data/bookings/{id}/info.rci`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEntity {
    pub id: String,
    /// Inventory vehicle the customer asked about.
    pub vehicle_id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Date the customer asked for.
    pub preferred_date: Option<NaiveDate>,
    pub message: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingEntity {
    pub fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
