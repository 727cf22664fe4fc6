use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;

use super::vehicle_entity::VehicleEntity;

/// API-facing repository abstraction for vehicle records.
pub trait VehicleApiRepository {
    fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<VehicleEntity>;

    fn read(&self, id: &str) -> anyhow::Result<VehicleEntity> {
        self.fs_adapter().read(id)
    }

    fn list(&self) -> anyhow::Result<Vec<VehicleEntity>> {
        self.fs_adapter().list()
    }

    fn insert(&self, vehicle: &VehicleEntity) -> anyhow::Result<()> {
        self.fs_adapter().insert(vehicle)
    }

    fn update(&self, vehicle: &VehicleEntity) -> anyhow::Result<()> {
        self.fs_adapter().update(vehicle)
    }

    fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.fs_adapter().delete(id)
    }
}
