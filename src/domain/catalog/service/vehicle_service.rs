use anyhow::Result;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::catalog_dto::VehicleListQuery;
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::core::persistence::vehicle::vehicle_api_repository_trait::VehicleApiRepository;
use crate::core::persistence::vehicle::vehicle_entity::{sanitize_photo_urls, VehicleEntity};
use crate::core::persistence::vehicle::vehicle_repository::VehicleRepository;
use crate::core::persistence::vehicle::vehicle_status::VehicleStatus;
use crate::domain::catalog::dto::vehicle_create_request::VehicleCreateRequest;
use crate::domain::catalog::dto::vehicle_update_request::{
    VehicleStatusRequest, VehicleUpdateRequest,
};

pub async fn list_vehicles(q: VehicleListQuery) -> Result<PaginatedResponse<VehicleEntity>> {
    let repo = VehicleRepository::new();
    list_vehicles_with_repo(&repo, q).await
}

pub async fn get_vehicle(id: String) -> Result<VehicleEntity> {
    let repo = VehicleRepository::new();
    repo.read(&id)
}

pub async fn create_vehicle(req: VehicleCreateRequest) -> Result<VehicleEntity> {
    req.validate()?;
    let repo = VehicleRepository::new();
    create_vehicle_with_repo(&repo, req).await
}

pub async fn update_vehicle(id: String, req: VehicleUpdateRequest) -> Result<VehicleEntity> {
    req.validate()?;
    let repo = VehicleRepository::new();
    update_vehicle_with_repo(&repo, id, req).await
}

pub async fn set_vehicle_status(id: String, req: VehicleStatusRequest) -> Result<Value> {
    let repo = VehicleRepository::new();
    set_vehicle_status_with_repo(&repo, id, req).await
}

pub async fn delete_vehicle(id: String) -> Result<Value> {
    let repo = VehicleRepository::new();
    // read first so a miss surfaces as 404 rather than a silent no-op
    repo.read(&id)?;
    repo.delete(&id)?;
    Ok(serde_json::json!({ "deleted": id }))
}

async fn list_vehicles_with_repo<R: VehicleApiRepository>(
    repo: &R,
    q: VehicleListQuery,
) -> Result<PaginatedResponse<VehicleEntity>> {
    let mut vehicles = repo.list()?;

    if let Some(status) = q.status {
        vehicles.retain(|v| v.status == status);
    }
    if let Some(make) = &q.make {
        vehicles.retain(|v| v.make.eq_ignore_ascii_case(make));
    }
    if let Some(featured) = q.featured {
        vehicles.retain(|v| v.featured == featured);
    }

    // newest listings first
    vehicles.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = vehicles.len();
    let offset = q.offset.unwrap_or(0);
    let limit = q.limit.unwrap_or(20);
    let items = vehicles.into_iter().skip(offset).take(limit).collect();

    Ok(PaginatedResponse {
        items,
        total,
        limit,
        offset,
    })
}

async fn create_vehicle_with_repo<R: VehicleApiRepository>(
    repo: &R,
    req: VehicleCreateRequest,
) -> Result<VehicleEntity> {
    let now = Utc::now();
    let entity = VehicleEntity {
        id: Uuid::new_v4().to_string(),
        make: req.make.trim().to_string(),
        model: req.model.trim().to_string(),
        year: req.year,
        price: req.price,
        mileage_km: req.mileage_km,
        fuel: req.fuel.and_then(non_empty),
        gearbox: req.gearbox.and_then(non_empty),
        body_style: req.body_style.and_then(non_empty),
        color: req.color.and_then(non_empty),
        description: req.description.and_then(non_empty),
        photo_urls: sanitize_photo_urls(req.photo_urls.unwrap_or_default()),
        status: req.status.unwrap_or(VehicleStatus::Available),
        featured: req.featured.unwrap_or(false),
        created_at: now,
        updated_at: now,
    };

    repo.insert(&entity)?;
    Ok(entity)
}

async fn update_vehicle_with_repo<R: VehicleApiRepository>(
    repo: &R,
    id: String,
    req: VehicleUpdateRequest,
) -> Result<VehicleEntity> {
    let mut entity = repo.read(&id)?;
    entity.apply_update(req);
    repo.update(&entity)?;
    Ok(entity)
}

async fn set_vehicle_status_with_repo<R: VehicleApiRepository>(
    repo: &R,
    id: String,
    req: VehicleStatusRequest,
) -> Result<Value> {
    let mut entity = repo.read(&id)?;
    entity.status = req.status;
    entity.updated_at = Utc::now();
    repo.update(&entity)?;

    Ok(serde_json::json!({
        "id": entity.id,
        "status": entity.status,
        "updated_at": entity.updated_at.to_rfc3339(),
    }))
}

fn non_empty(v: String) -> Option<String> {
    let s = v.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::record_fs_adapter_trait::{
        RecordFsAdapterTrait, RecordNotFound,
    };
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockVehicleAdapter {
        state: Mutex<HashMap<String, VehicleEntity>>,
    }

    impl RecordFsAdapterTrait<VehicleEntity> for MockVehicleAdapter {
        fn new() -> Self
        where
            Self: Sized,
        {
            Self::default()
        }

        fn read(&self, id: &str) -> Result<VehicleEntity> {
            self.state
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| RecordNotFound::new("Vehicle", id).into())
        }

        fn list(&self) -> Result<Vec<VehicleEntity>> {
            Ok(self.state.lock().unwrap().values().cloned().collect())
        }

        fn insert(&self, data: &VehicleEntity) -> Result<()> {
            self.state
                .lock()
                .unwrap()
                .insert(data.id.clone(), data.clone());
            Ok(())
        }

        fn update(&self, data: &VehicleEntity) -> Result<()> {
            self.insert(data)
        }

        fn delete(&self, id: &str) -> Result<()> {
            self.state.lock().unwrap().remove(id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockVehicleRepository {
        adapter: MockVehicleAdapter,
    }

    impl VehicleApiRepository for MockVehicleRepository {
        fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<VehicleEntity> {
            &self.adapter
        }
    }

    fn create_payload(make: &str, price: u64) -> VehicleCreateRequest {
        serde_json::from_value(json!({
            "make": make,
            "model": "Model X",
            "year": 2021,
            "price": price,
            "mileage_km": 42_000
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_assigns_id_and_defaults() {
        let repo = MockVehicleRepository::default();

        let created = create_vehicle_with_repo(&repo, create_payload("Audi", 25_000))
            .await
            .expect("create should succeed");

        assert!(!created.id.is_empty());
        assert_eq!(created.status, VehicleStatus::Available);
        assert!(!created.featured);

        let stored = repo.read(&created.id).expect("stored vehicle readable");
        assert_eq!(stored.make, "Audi");
    }

    #[tokio::test]
    async fn list_filters_by_status_and_paginates() {
        let repo = MockVehicleRepository::default();

        for i in 0..5 {
            let created = create_vehicle_with_repo(&repo, create_payload("BMW", 10_000 + i))
                .await
                .unwrap();
            if i < 2 {
                set_vehicle_status_with_repo(
                    &repo,
                    created.id,
                    VehicleStatusRequest {
                        status: VehicleStatus::Sold,
                    },
                )
                .await
                .unwrap();
            }
        }

        let q: VehicleListQuery = serde_json::from_value(json!({
            "status": "sold",
            "limit": 1
        }))
        .unwrap();

        let page = list_vehicles_with_repo(&repo, q).await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].status, VehicleStatus::Sold);
    }

    #[tokio::test]
    async fn update_merges_partial_fields() {
        let repo = MockVehicleRepository::default();
        let created = create_vehicle_with_repo(&repo, create_payload("Skoda", 18_000))
            .await
            .unwrap();

        let patch: VehicleUpdateRequest = serde_json::from_value(json!({
            "price": 17_500,
            "color": "  red  "
        }))
        .unwrap();

        let updated = update_vehicle_with_repo(&repo, created.id.clone(), patch)
            .await
            .unwrap();

        assert_eq!(updated.price, 17_500);
        assert_eq!(updated.color.as_deref(), Some("red"));
        assert_eq!(updated.make, "Skoda");
    }

    #[tokio::test]
    async fn photo_urls_with_separator_characters_are_dropped() {
        let repo = MockVehicleRepository::default();
        let created = create_vehicle_with_repo(&repo, create_payload("Volvo", 30_000))
            .await
            .unwrap();

        let patch: VehicleUpdateRequest = serde_json::from_value(json!({
            "photo_urls": ["/uploads/a.jpg", "/uploads/b,c.jpg", "  ", "/uploads/d.jpg"]
        }))
        .unwrap();

        let updated = update_vehicle_with_repo(&repo, created.id, patch)
            .await
            .unwrap();

        // comma entries would split into bogus entries on the next read
        assert_eq!(updated.photo_urls, vec!["/uploads/a.jpg", "/uploads/d.jpg"]);
    }

    #[tokio::test]
    async fn update_missing_vehicle_is_a_typed_miss() {
        let repo = MockVehicleRepository::default();
        let patch: VehicleUpdateRequest = serde_json::from_value(json!({"price": 1})).unwrap();

        let err = update_vehicle_with_repo(&repo, "does-not-exist".into(), patch)
            .await
            .expect_err("missing vehicle should fail");

        assert!(err.downcast_ref::<RecordNotFound>().is_some());
    }
}
