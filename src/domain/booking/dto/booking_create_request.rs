use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::persistence::booking::booking_status::BookingStatus;

/// Public create payload for a test-drive / viewing booking.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingCreateRequest {
    #[validate(length(min = 1, max = 64))]
    pub vehicle_id: String,
    #[validate(length(min = 1, max = 128))]
    pub customer_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    #[validate(length(max = 4096))]
    pub message: Option<String>,
}

/// Back-office status patch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingStatusRequest {
    pub status: BookingStatus,
}
