//! Filesystem persistence: entities, repositories, and fs adapters.

pub mod booking;
pub mod fixed_fs_adapter_trait;
pub mod fs_util;
pub mod inquiry;
pub mod record_fs_adapter_trait;
pub mod settings;
pub mod storage_path;
pub mod vehicle;
