use std::fs;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::core::persistence::fixed_fs_adapter_trait::FixedFsAdapterTrait;
use crate::core::persistence::fs_util::{escape_text, read_kv_lines, unescape_text, write_atomic};
use crate::core::persistence::storage_path::site_settings_path;

use super::site_settings_entity::SiteSettingsEntity;

/// FS adapter for persisted site settings.
///
/// Uses a simple key-value `settings.rci` file with atomic writes.
pub struct SiteSettingsFsAdapter;

impl FixedFsAdapterTrait<SiteSettingsEntity> for SiteSettingsFsAdapter {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self {}
    }

    fn read(&self) -> Result<SiteSettingsEntity> {
        let path = site_settings_path();
        if !path.exists() {
            return Ok(SiteSettingsEntity::default());
        }

        let mut s = SiteSettingsEntity::default();
        for (key, val) in read_kv_lines(&path)? {
            match key.as_str() {
                "SITE_NAME" => {
                    if !val.is_empty() {
                        s.site_name = val;
                    }
                }
                "TAGLINE" => s.tagline = opt(val),
                "LOGO_URL" => s.logo_url = opt(val),
                "CONTACT_EMAIL" => s.contact_email = opt(val),
                "CONTACT_PHONE" => s.contact_phone = opt(val),
                "ADDRESS" => s.address = opt(val),
                "OPENING_HOURS" => s.opening_hours = opt(val).map(|v| unescape_text(&v)),
                "LEGAL_TEXT" => s.legal_text = opt(val).map(|v| unescape_text(&v)),
                "UPDATED_AT" => {
                    if let Ok(dt) = val.parse::<DateTime<Utc>>() {
                        s.updated_at = dt;
                    }
                }
                "VERSION" => s.version = val,
                _ => {}
            }
        }

        Ok(s)
    }

    fn insert(&self, data: &SiteSettingsEntity) -> Result<()> {
        self.write(data)
    }

    fn update(&self, data: &SiteSettingsEntity) -> Result<()> {
        self.write(data)
    }

    fn delete(&self) -> Result<()> {
        let path = site_settings_path();
        if path.exists() {
            fs::remove_file(&path).context("Failed to delete settings file")?;
        }
        Ok(())
    }
}

impl SiteSettingsFsAdapter {
    fn write(&self, data: &SiteSettingsEntity) -> Result<()> {
        use std::fmt::Write as _;

        let mut body = String::new();
        let _ = writeln!(body, "SITE_NAME:{}", data.site_name);
        let _ = writeln!(body, "TAGLINE:{}", data.tagline.clone().unwrap_or_default());
        let _ = writeln!(body, "LOGO_URL:{}", data.logo_url.clone().unwrap_or_default());
        let _ = writeln!(
            body,
            "CONTACT_EMAIL:{}",
            data.contact_email.clone().unwrap_or_default()
        );
        let _ = writeln!(
            body,
            "CONTACT_PHONE:{}",
            data.contact_phone.clone().unwrap_or_default()
        );
        let _ = writeln!(body, "ADDRESS:{}", data.address.clone().unwrap_or_default());
        let _ = writeln!(
            body,
            "OPENING_HOURS:{}",
            data.opening_hours.as_deref().map(escape_text).unwrap_or_default()
        );
        let _ = writeln!(
            body,
            "LEGAL_TEXT:{}",
            data.legal_text.as_deref().map(escape_text).unwrap_or_default()
        );
        let _ = writeln!(body, "UPDATED_AT:{}", data.updated_at.to_rfc3339());
        let _ = writeln!(body, "VERSION:{}", data.version);

        write_atomic(&site_settings_path(), &body)
    }
}

fn opt(val: String) -> Option<String> {
    if val.is_empty() {
        None
    } else {
        Some(val)
    }
}
