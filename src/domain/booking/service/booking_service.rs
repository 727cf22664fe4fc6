use anyhow::Result;
use chrono::Utc;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::booking_dto::BookingListQuery;
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::core::persistence::booking::booking_api_repository_trait::BookingApiRepository;
use crate::core::persistence::booking::booking_entity::BookingEntity;
use crate::core::persistence::booking::booking_repository::BookingRepository;
use crate::core::persistence::booking::booking_status::BookingStatus;
use crate::core::persistence::vehicle::vehicle_api_repository_trait::VehicleApiRepository;
use crate::core::persistence::vehicle::vehicle_repository::VehicleRepository;
use crate::domain::booking::dto::booking_create_request::{
    BookingCreateRequest, BookingStatusRequest,
};

pub async fn create_booking(req: BookingCreateRequest) -> Result<BookingEntity> {
    req.validate()?;
    // reject bookings for vehicles that are not in the inventory
    VehicleRepository::new().read(&req.vehicle_id)?;
    let repo = BookingRepository::new();
    create_booking_with_repo(&repo, req).await
}

pub async fn list_bookings(q: BookingListQuery) -> Result<PaginatedResponse<BookingEntity>> {
    let repo = BookingRepository::new();
    list_bookings_with_repo(&repo, q).await
}

pub async fn get_booking(id: String) -> Result<BookingEntity> {
    let repo = BookingRepository::new();
    repo.read(&id)
}

pub async fn set_booking_status(id: String, req: BookingStatusRequest) -> Result<Value> {
    let repo = BookingRepository::new();
    set_booking_status_with_repo(&repo, id, req).await
}

pub async fn delete_booking(id: String) -> Result<Value> {
    let repo = BookingRepository::new();
    repo.read(&id)?;
    repo.delete(&id)?;
    Ok(serde_json::json!({ "deleted": id }))
}

async fn create_booking_with_repo<R: BookingApiRepository>(
    repo: &R,
    req: BookingCreateRequest,
) -> Result<BookingEntity> {
    let now = Utc::now();
    let entity = BookingEntity {
        id: Uuid::new_v4().to_string(),
        vehicle_id: req.vehicle_id,
        customer_name: req.customer_name.trim().to_string(),
        email: req.email.trim().to_string(),
        phone: req.phone.and_then(non_empty),
        preferred_date: req.preferred_date,
        message: req.message.and_then(non_empty),
        status: BookingStatus::Pending,
        created_at: now,
        updated_at: now,
    };

    repo.insert(&entity)?;
    info!(booking_id = %entity.id, vehicle_id = %entity.vehicle_id, "Booking request created");
    Ok(entity)
}

async fn list_bookings_with_repo<R: BookingApiRepository>(
    repo: &R,
    q: BookingListQuery,
) -> Result<PaginatedResponse<BookingEntity>> {
    let mut bookings = repo.list()?;

    if let Some(status) = q.status {
        bookings.retain(|b| b.status == status);
    }
    if let Some(vehicle_id) = &q.vehicle_id {
        bookings.retain(|b| &b.vehicle_id == vehicle_id);
    }

    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = bookings.len();
    let offset = q.offset.unwrap_or(0);
    let limit = q.limit.unwrap_or(20);
    let items = bookings.into_iter().skip(offset).take(limit).collect();

    Ok(PaginatedResponse {
        items,
        total,
        limit,
        offset,
    })
}

async fn set_booking_status_with_repo<R: BookingApiRepository>(
    repo: &R,
    id: String,
    req: BookingStatusRequest,
) -> Result<Value> {
    let mut entity = repo.read(&id)?;
    entity.set_status(req.status);
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
    struct MockBookingAdapter {
        state: Mutex<HashMap<String, BookingEntity>>,
    }

    impl RecordFsAdapterTrait<BookingEntity> for MockBookingAdapter {
        fn new() -> Self
        where
            Self: Sized,
        {
            Self::default()
        }

        fn read(&self, id: &str) -> Result<BookingEntity> {
            self.state
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| RecordNotFound::new("Booking", id).into())
        }

        fn list(&self) -> Result<Vec<BookingEntity>> {
            Ok(self.state.lock().unwrap().values().cloned().collect())
        }

        fn insert(&self, data: &BookingEntity) -> Result<()> {
            self.state
                .lock()
                .unwrap()
                .insert(data.id.clone(), data.clone());
            Ok(())
        }

        fn update(&self, data: &BookingEntity) -> Result<()> {
            self.insert(data)
        }

        fn delete(&self, id: &str) -> Result<()> {
            self.state.lock().unwrap().remove(id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockBookingRepository {
        adapter: MockBookingAdapter,
    }

    impl BookingApiRepository for MockBookingRepository {
        fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<BookingEntity> {
            &self.adapter
        }
    }

    #[tokio::test]
    async fn create_starts_pending_and_status_patch_moves_it() {
        let repo = MockBookingRepository::default();
        let payload: BookingCreateRequest = serde_json::from_value(json!({
            "vehicle_id": "veh-1",
            "customer_name": "Jamie Doe",
            "email": "jamie@example.com",
            "preferred_date": "2026-09-15"
        }))
        .unwrap();

        let created = create_booking_with_repo(&repo, payload).await.unwrap();
        assert_eq!(created.status, BookingStatus::Pending);

        let response = set_booking_status_with_repo(
            &repo,
            created.id.clone(),
            BookingStatusRequest {
                status: BookingStatus::Confirmed,
            },
        )
        .await
        .unwrap();

        assert_eq!(
            response.get("status").and_then(|v| v.as_str()),
            Some("confirmed")
        );
        assert_eq!(
            repo.read(&created.id).unwrap().status,
            BookingStatus::Confirmed
        );
    }

    #[tokio::test]
    async fn list_filters_by_vehicle() {
        let repo = MockBookingRepository::default();
        for vehicle in ["veh-a", "veh-a", "veh-b"] {
            let payload: BookingCreateRequest = serde_json::from_value(json!({
                "vehicle_id": vehicle,
                "customer_name": "Sam",
                "email": "sam@example.com"
            }))
            .unwrap();
            create_booking_with_repo(&repo, payload).await.unwrap();
        }

        let q: BookingListQuery =
            serde_json::from_value(json!({ "vehicle_id": "veh-a" })).unwrap();
        let page = list_bookings_with_repo(&repo, q).await.unwrap();

        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|b| b.vehicle_id == "veh-a"));
    }
}
