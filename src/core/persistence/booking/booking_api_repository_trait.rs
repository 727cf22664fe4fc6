use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;

use super::booking_entity::BookingEntity;

/// API-facing repository abstraction for booking records.
pub trait BookingApiRepository {
    fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<BookingEntity>;

    fn read(&self, id: &str) -> anyhow::Result<BookingEntity> {
        self.fs_adapter().read(id)
    }

    fn list(&self) -> anyhow::Result<Vec<BookingEntity>> {
        self.fs_adapter().list()
    }

    fn insert(&self, booking: &BookingEntity) -> anyhow::Result<()> {
        self.fs_adapter().insert(booking)
    }

    fn update(&self, booking: &BookingEntity) -> anyhow::Result<()> {
        self.fs_adapter().update(booking)
    }

    fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.fs_adapter().delete(id)
    }
}
