use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;

use super::booking_api_repository_trait::BookingApiRepository;
use super::booking_entity::BookingEntity;
use super::booking_fs_adapter::BookingFsAdapter;

pub struct BookingRepository {
    adapter: BookingFsAdapter,
}

impl BookingRepository {
    pub fn new() -> Self {
        Self {
            adapter: BookingFsAdapter::new(),
        }
    }
}

impl Default for BookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingApiRepository for BookingRepository {
    fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<BookingEntity> {
        &self.adapter
    }
}
