pub mod booking_api_repository_trait;
pub mod booking_entity;
pub mod booking_fs_adapter;
pub mod booking_repository;
pub mod booking_status;
