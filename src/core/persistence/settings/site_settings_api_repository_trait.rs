use crate::core::persistence::fixed_fs_adapter_trait::FixedFsAdapterTrait;

use super::site_settings_entity::SiteSettingsEntity;

/// API-facing repository abstraction for site settings.
pub trait SiteSettingsApiRepository {
    fn fs_adapter(&self) -> &dyn FixedFsAdapterTrait<SiteSettingsEntity>;

    fn read(&self) -> anyhow::Result<SiteSettingsEntity> {
        self.fs_adapter().read()
    }

    fn update(&self, settings: &SiteSettingsEntity) -> anyhow::Result<()> {
        self.fs_adapter().update(settings)
    }
}
