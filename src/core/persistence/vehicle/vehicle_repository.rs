use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;

use super::vehicle_api_repository_trait::VehicleApiRepository;
use super::vehicle_entity::VehicleEntity;
use super::vehicle_fs_adapter::VehicleFsAdapter;

pub struct VehicleRepository {
    adapter: VehicleFsAdapter,
}

impl VehicleRepository {
    pub fn new() -> Self {
        Self {
            adapter: VehicleFsAdapter::new(),
        }
    }
}

impl Default for VehicleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleApiRepository for VehicleRepository {
    fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<VehicleEntity> {
        &self.adapter
    }
}
