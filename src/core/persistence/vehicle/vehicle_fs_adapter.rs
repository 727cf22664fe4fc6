use std::fs;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::core::persistence::fs_util::{escape_text, read_kv_lines, unescape_text, write_atomic};
use crate::core::persistence::record_fs_adapter_trait::{RecordFsAdapterTrait, RecordNotFound};
use crate::core::persistence::storage_path::{vehicle_dir, vehicle_file_path, vehicles_root};

use super::vehicle_entity::VehicleEntity;
use super::vehicle_status::VehicleStatus;

/// FS adapter for vehicle records, one `info.rci` per vehicle id.
pub struct VehicleFsAdapter;

impl RecordFsAdapterTrait<VehicleEntity> for VehicleFsAdapter {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self {}
    }

    fn read(&self, id: &str) -> Result<VehicleEntity> {
        let path = vehicle_file_path(id);
        if !path.exists() {
            return Err(RecordNotFound::new("Vehicle", id).into());
        }

        let now = Utc::now();
        let mut e = VehicleEntity {
            id: id.to_string(),
            make: String::new(),
            model: String::new(),
            year: 0,
            price: 0,
            mileage_km: 0,
            fuel: None,
            gearbox: None,
            body_style: None,
            color: None,
            description: None,
            photo_urls: Vec::new(),
            status: VehicleStatus::Available,
            featured: false,
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
                "MAKE" => e.make = val,
                "MODEL" => e.model = val,
                "YEAR" => e.year = val.parse().unwrap_or_default(),
                "PRICE" => e.price = val.parse().unwrap_or_default(),
                "MILEAGE_KM" => e.mileage_km = val.parse().unwrap_or_default(),
                "FUEL" => e.fuel = opt(val),
                "GEARBOX" => e.gearbox = opt(val),
                "BODY_STYLE" => e.body_style = opt(val),
                "COLOR" => e.color = opt(val),
                "DESCRIPTION" => e.description = opt(val).map(|v| unescape_text(&v)),
                "PHOTO_URLS" => {
                    e.photo_urls = val
                        .split(',')
                        .map(|v| v.trim().to_string())
                        .filter(|v| !v.is_empty())
                        .collect();
                }
                "STATUS" => {
                    if let Some(s) = VehicleStatus::from_code(&val) {
                        e.status = s;
                    }
                }
                "FEATURED" => e.featured = val.eq_ignore_ascii_case("true"),
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

    fn list(&self) -> Result<Vec<VehicleEntity>> {
        let root = vehicles_root();
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut result = Vec::new();
        for entry in fs::read_dir(&root).context("Failed to read vehicles directory")? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let id = entry.file_name().to_string_lossy().to_string();
            match self.read(&id) {
                Ok(e) => result.push(e),
                Err(err) => tracing::warn!("Skipping unreadable vehicle record {id}: {err:?}"),
            }
        }
        Ok(result)
    }

    fn insert(&self, data: &VehicleEntity) -> Result<()> {
        self.write(data)
    }

    fn update(&self, data: &VehicleEntity) -> Result<()> {
        self.write(data)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let dir = vehicle_dir(id);
        if dir.exists() {
            fs::remove_dir_all(&dir).context("Failed to delete vehicle record")?;
        }
        Ok(())
    }
}

impl VehicleFsAdapter {
    fn write(&self, data: &VehicleEntity) -> Result<()> {
        use std::fmt::Write as _;

        let mut body = String::new();
        let _ = writeln!(body, "ID:{}", data.id);
        let _ = writeln!(body, "MAKE:{}", data.make);
        let _ = writeln!(body, "MODEL:{}", data.model);
        let _ = writeln!(body, "YEAR:{}", data.year);
        let _ = writeln!(body, "PRICE:{}", data.price);
        let _ = writeln!(body, "MILEAGE_KM:{}", data.mileage_km);
        let _ = writeln!(body, "FUEL:{}", data.fuel.clone().unwrap_or_default());
        let _ = writeln!(body, "GEARBOX:{}", data.gearbox.clone().unwrap_or_default());
        let _ = writeln!(body, "BODY_STYLE:{}", data.body_style.clone().unwrap_or_default());
        let _ = writeln!(body, "COLOR:{}", data.color.clone().unwrap_or_default());
        let _ = writeln!(
            body,
            "DESCRIPTION:{}",
            data.description.as_deref().map(escape_text).unwrap_or_default()
        );
        let _ = writeln!(body, "PHOTO_URLS:{}", data.photo_urls.join(","));
        let _ = writeln!(body, "STATUS:{}", data.status.as_code());
        let _ = writeln!(body, "FEATURED:{}", data.featured);
        let _ = writeln!(body, "CREATED_AT:{}", data.created_at.to_rfc3339());
        let _ = writeln!(body, "UPDATED_AT:{}", data.updated_at.to_rfc3339());

        write_atomic(&vehicle_file_path(&data.id), &body)
    }
}

fn opt(val: String) -> Option<String> {
    if val.is_empty() {
        None
    } else {
        Some(val)
    }
}
