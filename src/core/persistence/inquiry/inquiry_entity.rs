use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One contact-form inquiry.
///
/// Stored at: `data/inquiries/{id}/info.rci`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    /// Set when the inquiry was sent from a vehicle detail page.
    pub vehicle_id: Option<String>,
    /// Marked by the back office once handled.
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
