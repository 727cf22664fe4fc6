use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;

use super::inquiry_api_repository_trait::InquiryApiRepository;
use super::inquiry_entity::InquiryEntity;
use super::inquiry_fs_adapter::InquiryFsAdapter;

pub struct InquiryRepository {
    adapter: InquiryFsAdapter,
}

impl InquiryRepository {
    pub fn new() -> Self {
        Self {
            adapter: InquiryFsAdapter::new(),
        }
    }
}

impl Default for InquiryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InquiryApiRepository for InquiryRepository {
    fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<InquiryEntity> {
        &self.adapter
    }
}
