use std::env;
use std::path::PathBuf;

/// Base data directory, overridable for tests and container mounts.
pub fn data_root() -> PathBuf {
    env::var("SHOWROOM_DATA_DIR")
        .unwrap_or_else(|_| "data".to_string())
        .into()
}

pub fn site_settings_path() -> PathBuf {
    data_root().join("settings.rci")
}

pub fn vehicles_root() -> PathBuf {
    data_root().join("vehicles")
}

pub fn vehicle_dir(id: &str) -> PathBuf {
    vehicles_root().join(id)
}

pub fn vehicle_file_path(id: &str) -> PathBuf {
    vehicle_dir(id).join("info.rci")
}

pub fn bookings_root() -> PathBuf {
    data_root().join("bookings")
}

pub fn booking_file_path(id: &str) -> PathBuf {
    bookings_root().join(id).join("info.rci")
}

pub fn inquiries_root() -> PathBuf {
    data_root().join("inquiries")
}

pub fn inquiry_file_path(id: &str) -> PathBuf {
    inquiries_root().join(id).join("info.rci")
}

pub fn uploads_dir() -> PathBuf {
    data_root().join("uploads")
}
