use std::fs;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::core::persistence::fs_util::{escape_text, read_kv_lines, unescape_text, write_atomic};
use crate::core::persistence::record_fs_adapter_trait::{RecordFsAdapterTrait, RecordNotFound};
use crate::core::persistence::storage_path::{inquiries_root, inquiry_file_path};

use super::inquiry_entity::InquiryEntity;

/// FS adapter for inquiry records, one `info.rci` per inquiry id.
pub struct InquiryFsAdapter;

impl RecordFsAdapterTrait<InquiryEntity> for InquiryFsAdapter {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self {}
    }

    fn read(&self, id: &str) -> Result<InquiryEntity> {
        let path = inquiry_file_path(id);
        if !path.exists() {
            return Err(RecordNotFound::new("Inquiry", id).into());
        }

        let mut e = InquiryEntity {
            id: id.to_string(),
            name: String::new(),
            email: String::new(),
            phone: None,
            subject: None,
            message: String::new(),
            vehicle_id: None,
            read: false,
            created_at: Utc::now(),
        };

        for (key, val) in read_kv_lines(&path)? {
            match key.as_str() {
                "ID" => {
                    if !val.is_empty() {
                        e.id = val;
                    }
                }
                "NAME" => e.name = val,
                "EMAIL" => e.email = val,
                "PHONE" => e.phone = opt(val),
                "SUBJECT" => e.subject = opt(val),
                "MESSAGE" => e.message = unescape_text(&val),
                "VEHICLE_ID" => e.vehicle_id = opt(val),
                "READ" => e.read = val.eq_ignore_ascii_case("true"),
                "CREATED_AT" => {
                    if let Ok(dt) = val.parse::<DateTime<Utc>>() {
                        e.created_at = dt;
                    }
                }
                _ => {}
            }
        }

        Ok(e)
    }

    fn list(&self) -> Result<Vec<InquiryEntity>> {
        let root = inquiries_root();
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut result = Vec::new();
        for entry in fs::read_dir(&root).context("Failed to read inquiries directory")? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let id = entry.file_name().to_string_lossy().to_string();
            match self.read(&id) {
                Ok(e) => result.push(e),
                Err(err) => tracing::warn!("Skipping unreadable inquiry record {id}: {err:?}"),
            }
        }
        Ok(result)
    }

    fn insert(&self, data: &InquiryEntity) -> Result<()> {
        self.write(data)
    }

    fn update(&self, data: &InquiryEntity) -> Result<()> {
        self.write(data)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let dir = inquiries_root().join(id);
        if dir.exists() {
            fs::remove_dir_all(&dir).context("Failed to delete inquiry record")?;
        }
        Ok(())
    }
}

impl InquiryFsAdapter {
    fn write(&self, data: &InquiryEntity) -> Result<()> {
        use std::fmt::Write as _;

        let mut body = String::new();
        let _ = writeln!(body, "ID:{}", data.id);
        let _ = writeln!(body, "NAME:{}", data.name);
        let _ = writeln!(body, "EMAIL:{}", data.email);
        let _ = writeln!(body, "PHONE:{}", data.phone.clone().unwrap_or_default());
        let _ = writeln!(body, "SUBJECT:{}", data.subject.clone().unwrap_or_default());
        let _ = writeln!(body, "MESSAGE:{}", escape_text(&data.message));
        let _ = writeln!(body, "VEHICLE_ID:{}", data.vehicle_id.clone().unwrap_or_default());
        let _ = writeln!(body, "READ:{}", data.read);
        let _ = writeln!(body, "CREATED_AT:{}", data.created_at.to_rfc3339());

        write_atomic(&inquiry_file_path(&data.id), &body)
    }
}

fn opt(val: String) -> Option<String> {
    if val.is_empty() {
        None
    } else {
        Some(val)
    }
}
