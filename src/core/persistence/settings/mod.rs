pub mod site_settings_api_repository_trait;
pub mod site_settings_entity;
pub mod site_settings_fs_adapter;
pub mod site_settings_repository;
