use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::settings::dto::site_settings_upsert_request::SiteSettingsUpsertRequest;

/// Site-wide settings shown on the public pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsEntity {
    /// Dealership display name.
    pub site_name: String,
    /// Short tagline under the name.
    pub tagline: Option<String>,
    /// Public path of the logo image.
    pub logo_url: Option<String>,
    /// Contact email shown on the site.
    pub contact_email: Option<String>,
    /// Contact phone shown on the site.
    pub contact_phone: Option<String>,
    /// Street address of the showroom.
    pub address: Option<String>,
    /// Opening hours, free text.
    pub opening_hours: Option<String>,
    /// Imprint / legal notice text.
    pub legal_text: Option<String>,
    /// Last update timestamp (UTC).
    pub updated_at: DateTime<Utc>,
    /// Version identifier for the settings format.
    pub version: String,
}

impl Default for SiteSettingsEntity {
    fn default() -> Self {
        Self {
            site_name: "Showroom".into(),
            tagline: None,
            logo_url: None,
            contact_email: None,
            contact_phone: None,
            address: None,
            opening_hours: None,
            legal_text: None,
            updated_at: Utc::now(),
            version: "1.0.0".into(),
        }
    }
}

impl SiteSettingsEntity {
    pub fn apply_update(&mut self, req: SiteSettingsUpsertRequest) {
        if let Some(v) = req.site_name {
            if let Some(name) = normalize_string(v) {
                self.site_name = name;
            }
        }

        if let Some(v) = req.tagline {
            self.tagline = normalize_string(v);
        }

        if let Some(v) = req.logo_url {
            self.logo_url = normalize_string(v);
        }

        if let Some(v) = req.contact_email {
            self.contact_email = normalize_string(v);
        }

        if let Some(v) = req.contact_phone {
            self.contact_phone = normalize_string(v);
        }

        if let Some(v) = req.address {
            self.address = normalize_string(v);
        }

        if let Some(v) = req.opening_hours {
            self.opening_hours = normalize_string(v);
        }

        if let Some(v) = req.legal_text {
            self.legal_text = normalize_string(v);
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
