use serde::{Deserialize, Serialize};
use validator::Validate;

/// Upsert payload for site settings. All fields optional; present fields
/// overwrite, empty strings clear.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SiteSettingsUpsertRequest {
    #[validate(length(min = 1, max = 128))]
    pub site_name: Option<String>,
    #[validate(length(max = 256))]
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    #[validate(length(max = 32))]
    pub contact_phone: Option<String>,
    #[validate(length(max = 512))]
    pub address: Option<String>,
    #[validate(length(max = 1024))]
    pub opening_hours: Option<String>,
    #[validate(length(max = 16384))]
    pub legal_text: Option<String>,
}
