use std::sync::OnceLock;
use std::time::Instant;

use anyhow::Result;
use serde_json::{json, Value};

use crate::core::persistence::storage_path::data_root;
use crate::core::persistence::vehicle::vehicle_api_repository_trait::VehicleApiRepository;
use crate::core::persistence::vehicle::vehicle_repository::VehicleRepository;

static STARTED_AT: OnceLock<Instant> = OnceLock::new();

fn started_at() -> Instant {
    *STARTED_AT.get_or_init(Instant::now)
}

/// Record process start. Called once from main; later calls are no-ops.
pub fn mark_started() {
    let _ = started_at();
}

pub async fn status() -> Result<Value> {
    let vehicles = VehicleRepository::new().list().map(|v| v.len()).ok();

    Ok(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": started_at().elapsed().as_secs(),
        "data_dir": data_root().display().to_string(),
        "vehicle_count": vehicles,
    }))
}
