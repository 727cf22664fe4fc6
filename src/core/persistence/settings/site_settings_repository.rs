use crate::core::persistence::fixed_fs_adapter_trait::FixedFsAdapterTrait;

use super::site_settings_api_repository_trait::SiteSettingsApiRepository;
use super::site_settings_entity::SiteSettingsEntity;
use super::site_settings_fs_adapter::SiteSettingsFsAdapter;

pub struct SiteSettingsRepository {
    adapter: SiteSettingsFsAdapter,
}

impl SiteSettingsRepository {
    pub fn new() -> Self {
        Self {
            adapter: SiteSettingsFsAdapter::new(),
        }
    }
}

impl Default for SiteSettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteSettingsApiRepository for SiteSettingsRepository {
    fn fs_adapter(&self) -> &dyn FixedFsAdapterTrait<SiteSettingsEntity> {
        &self.adapter
    }
}
