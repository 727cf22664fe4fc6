use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public create payload for a contact-form inquiry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InquiryCreateRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[validate(length(max = 256))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 4096))]
    pub message: String,
    pub vehicle_id: Option<String>,
}

/// Back-office read-flag patch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InquiryReadRequest {
    pub read: bool,
}
