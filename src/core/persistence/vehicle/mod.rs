pub mod vehicle_api_repository_trait;
pub mod vehicle_entity;
pub mod vehicle_fs_adapter;
pub mod vehicle_repository;
pub mod vehicle_status;
