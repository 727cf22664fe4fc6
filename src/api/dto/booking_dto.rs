//! Booking API DTOs

use serde::Deserialize;

use crate::core::persistence::booking::booking_status::BookingStatus;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,
    pub vehicle_id: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}
