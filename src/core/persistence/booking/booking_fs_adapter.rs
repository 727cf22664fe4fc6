use std::fs;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use crate::core::persistence::fs_util::{escape_text, read_kv_lines, unescape_text, write_atomic};
use crate::core::persistence::record_fs_adapter_trait::{RecordFsAdapterTrait, RecordNotFound};
use crate::core::persistence::storage_path::{booking_file_path, bookings_root};

use super::booking_entity::BookingEntity;
use super::booking_status::BookingStatus;

/// FS adapter for booking records, one `info.rci` per booking id.
pub struct BookingFsAdapter;

impl RecordFsAdapterTrait<BookingEntity> for BookingFsAdapter {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self {}
    }

    fn read(&self, id: &str) -> Result<BookingEntity> {
        let path = booking_file_path(id);
        if !path.exists() {
            return Err(RecordNotFound::new("Booking", id).into());
        }

        let now = Utc::now();
        let mut e = BookingEntity {
            id: id.to_string(),
            vehicle_id: String::new(),
            customer_name: String::new(),
            email: String::new(),
            phone: None,
            preferred_date: None,
            message: None,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        for (key, val) in read_kv_lines(&path)? {
            match key.as_str() {
                "ID" => {
                    if !val.is_empty() {
                        e.id = val;
                    }
                }
                "VEHICLE_ID" => e.vehicle_id = val,
                "CUSTOMER_NAME" => e.customer_name = val,
                "EMAIL" => e.email = val,
                "PHONE" => e.phone = opt(val),
                "PREFERRED_DATE" => e.preferred_date = val.parse::<NaiveDate>().ok(),
                "MESSAGE" => e.message = opt(val).map(|v| unescape_text(&v)),
                "STATUS" => {
                    if let Some(s) = BookingStatus::from_code(&val) {
                        e.status = s;
                    }
                }
                "CREATED_AT" => {
                    if let Ok(dt) = val.parse::<DateTime<Utc>>() {
                        e.created_at = dt;
                    }
                }
                "UPDATED_AT" => {
                    if let Ok(dt) = val.parse::<DateTime<Utc>>() {
                        e.updated_at = dt;
                    }
                }
                _ => {}
            }
        }

        Ok(e)
    }

    fn list(&self) -> Result<Vec<BookingEntity>> {
        let root = bookings_root();
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut result = Vec::new();
        for entry in fs::read_dir(&root).context("Failed to read bookings directory")? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let id = entry.file_name().to_string_lossy().to_string();
            match self.read(&id) {
                Ok(e) => result.push(e),
                Err(err) => tracing::warn!("Skipping unreadable booking record {id}: {err:?}"),
            }
        }
        Ok(result)
    }

    fn insert(&self, data: &BookingEntity) -> Result<()> {
        self.write(data)
    }

    fn update(&self, data: &BookingEntity) -> Result<()> {
        self.write(data)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let dir = bookings_root().join(id);
        if dir.exists() {
            fs::remove_dir_all(&dir).context("Failed to delete booking record")?;
        }
        Ok(())
    }
}

impl BookingFsAdapter {
    fn write(&self, data: &BookingEntity) -> Result<()> {
        use std::fmt::Write as _;

        let mut body = String::new();
        let _ = writeln!(body, "ID:{}", data.id);
        let _ = writeln!(body, "VEHICLE_ID:{}", data.vehicle_id);
        let _ = writeln!(body, "CUSTOMER_NAME:{}", data.customer_name);
        let _ = writeln!(body, "EMAIL:{}", data.email);
        let _ = writeln!(body, "PHONE:{}", data.phone.clone().unwrap_or_default());
        let _ = writeln!(
            body,
            "PREFERRED_DATE:{}",
            data.preferred_date.map(|d| d.to_string()).unwrap_or_default()
        );
        let _ = writeln!(
            body,
            "MESSAGE:{}",
            data.message.as_deref().map(escape_text).unwrap_or_default()
        );
        let _ = writeln!(body, "STATUS:{}", data.status.as_code());
        let _ = writeln!(body, "CREATED_AT:{}", data.created_at.to_rfc3339());
        let _ = writeln!(body, "UPDATED_AT:{}", data.updated_at.to_rfc3339());

        write_atomic(&booking_file_path(&data.id), &body)
    }
}

fn opt(val: String) -> Option<String> {
    if val.is_empty() {
        None
    } else {
        Some(val)
    }
}
