pub mod inquiry_api_repository_trait;
pub mod inquiry_entity;
pub mod inquiry_fs_adapter;
pub mod inquiry_repository;
