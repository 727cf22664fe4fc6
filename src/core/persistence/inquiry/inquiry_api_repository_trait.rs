use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;

use super::inquiry_entity::InquiryEntity;

/// API-facing repository abstraction for inquiry records.
pub trait InquiryApiRepository {
    fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<InquiryEntity>;

    fn read(&self, id: &str) -> anyhow::Result<InquiryEntity> {
        self.fs_adapter().read(id)
    }

    fn list(&self) -> anyhow::Result<Vec<InquiryEntity>> {
        self.fs_adapter().list()
    }

    fn insert(&self, inquiry: &InquiryEntity) -> anyhow::Result<()> {
        self.fs_adapter().insert(inquiry)
    }

    fn update(&self, inquiry: &InquiryEntity) -> anyhow::Result<()> {
        self.fs_adapter().update(inquiry)
    }

    fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.fs_adapter().delete(id)
    }
}
