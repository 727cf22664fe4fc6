use anyhow::Result;
use serde_json::Value;
use validator::Validate;

use crate::core::persistence::settings::site_settings_api_repository_trait::SiteSettingsApiRepository;
use crate::core::persistence::settings::site_settings_entity::SiteSettingsEntity;
use crate::core::persistence::settings::site_settings_repository::SiteSettingsRepository;
use crate::domain::settings::dto::site_settings_upsert_request::SiteSettingsUpsertRequest;

pub async fn get_site_settings() -> Result<SiteSettingsEntity> {
    let repo = SiteSettingsRepository::new();
    get_site_settings_with_repo(&repo).await
}

pub async fn upsert_site_settings(req: SiteSettingsUpsertRequest) -> Result<Value> {
    req.validate()?;
    let repo = SiteSettingsRepository::new();
    upsert_site_settings_with_repo(&repo, req).await
}

async fn get_site_settings_with_repo<R: SiteSettingsApiRepository>(
    repo: &R,
) -> Result<SiteSettingsEntity> {
    repo.read()
}

async fn upsert_site_settings_with_repo<R: SiteSettingsApiRepository>(
    repo: &R,
    req: SiteSettingsUpsertRequest,
) -> Result<Value> {
    let mut settings = repo.read()?;
    settings.apply_update(req);

    repo.update(&settings)?;

    Ok(serde_json::json!({
        "message": "Settings updated successfully",
        "updated_at": settings.updated_at.to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::fixed_fs_adapter_trait::FixedFsAdapterTrait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSiteSettingsAdapter {
        state: Mutex<SiteSettingsEntity>,
    }

    impl FixedFsAdapterTrait<SiteSettingsEntity> for MockSiteSettingsAdapter {
        fn new() -> Self
        where
            Self: Sized,
        {
            Self::default()
        }

        fn read(&self) -> Result<SiteSettingsEntity> {
            Ok(self.state.lock().unwrap().clone())
        }

        fn insert(&self, data: &SiteSettingsEntity) -> Result<()> {
            *self.state.lock().unwrap() = data.clone();
            Ok(())
        }

        fn update(&self, data: &SiteSettingsEntity) -> Result<()> {
            self.insert(data)
        }

        fn delete(&self) -> Result<()> {
            *self.state.lock().unwrap() = SiteSettingsEntity::default();
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockSiteSettingsRepository {
        adapter: MockSiteSettingsAdapter,
    }

    impl SiteSettingsApiRepository for MockSiteSettingsRepository {
        fn fs_adapter(&self) -> &dyn FixedFsAdapterTrait<SiteSettingsEntity> {
            &self.adapter
        }
    }

    #[tokio::test]
    async fn upsert_uses_trait_repository() {
        let repo = MockSiteSettingsRepository::default();
        let payload: SiteSettingsUpsertRequest = serde_json::from_value(json!({
            "site_name": "Hilltop Motors",
            "contact_email": "sales@hilltop.example"
        }))
        .unwrap();

        let response = upsert_site_settings_with_repo(&repo, payload)
            .await
            .expect("upsert should succeed");

        let stored = repo.adapter.state.lock().unwrap().clone();
        assert_eq!(stored.site_name, "Hilltop Motors");
        assert_eq!(
            stored.contact_email.as_deref(),
            Some("sales@hilltop.example")
        );
        assert_eq!(
            response.get("message").and_then(|v| v.as_str()),
            Some("Settings updated successfully")
        );
    }

    #[tokio::test]
    async fn empty_string_clears_optional_field() {
        let repo = MockSiteSettingsRepository::default();

        let set: SiteSettingsUpsertRequest =
            serde_json::from_value(json!({ "tagline": "Family-run since 1982" })).unwrap();
        upsert_site_settings_with_repo(&repo, set).await.unwrap();

        let clear: SiteSettingsUpsertRequest =
            serde_json::from_value(json!({ "tagline": "" })).unwrap();
        upsert_site_settings_with_repo(&repo, clear).await.unwrap();

        assert!(repo.adapter.state.lock().unwrap().tagline.is_none());
    }
}
