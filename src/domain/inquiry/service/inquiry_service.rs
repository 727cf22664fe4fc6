use anyhow::Result;
use chrono::Utc;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::inquiry_dto::InquiryListQuery;
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::core::persistence::inquiry::inquiry_api_repository_trait::InquiryApiRepository;
use crate::core::persistence::inquiry::inquiry_entity::InquiryEntity;
use crate::core::persistence::inquiry::inquiry_repository::InquiryRepository;
use crate::domain::inquiry::dto::inquiry_create_request::{
    InquiryCreateRequest, InquiryReadRequest,
};

pub async fn create_inquiry(req: InquiryCreateRequest) -> Result<InquiryEntity> {
    req.validate()?;
    let repo = InquiryRepository::new();
    create_inquiry_with_repo(&repo, req).await
}

pub async fn list_inquiries(q: InquiryListQuery) -> Result<PaginatedResponse<InquiryEntity>> {
    let repo = InquiryRepository::new();
    list_inquiries_with_repo(&repo, q).await
}

pub async fn get_inquiry(id: String) -> Result<InquiryEntity> {
    let repo = InquiryRepository::new();
    repo.read(&id)
}

pub async fn set_inquiry_read(id: String, req: InquiryReadRequest) -> Result<Value> {
    let repo = InquiryRepository::new();
    set_inquiry_read_with_repo(&repo, id, req).await
}

pub async fn delete_inquiry(id: String) -> Result<Value> {
    let repo = InquiryRepository::new();
    repo.read(&id)?;
    repo.delete(&id)?;
    Ok(serde_json::json!({ "deleted": id }))
}

async fn create_inquiry_with_repo<R: InquiryApiRepository>(
    repo: &R,
    req: InquiryCreateRequest,
) -> Result<InquiryEntity> {
    let entity = InquiryEntity {
        id: Uuid::new_v4().to_string(),
        name: req.name.trim().to_string(),
        email: req.email.trim().to_string(),
        phone: req.phone.and_then(non_empty),
        subject: req.subject.and_then(non_empty),
        message: req.message.trim().to_string(),
        vehicle_id: req.vehicle_id.and_then(non_empty),
        read: false,
        created_at: Utc::now(),
    };

    repo.insert(&entity)?;
    info!(inquiry_id = %entity.id, "Inquiry received");
    Ok(entity)
}

async fn list_inquiries_with_repo<R: InquiryApiRepository>(
    repo: &R,
    q: InquiryListQuery,
) -> Result<PaginatedResponse<InquiryEntity>> {
    let mut inquiries = repo.list()?;

    if let Some(unread) = q.unread {
        inquiries.retain(|i| i.read != unread);
    }

    inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = inquiries.len();
    let offset = q.offset.unwrap_or(0);
    let limit = q.limit.unwrap_or(20);
    let items = inquiries.into_iter().skip(offset).take(limit).collect();

    Ok(PaginatedResponse {
        items,
        total,
        limit,
        offset,
    })
}

async fn set_inquiry_read_with_repo<R: InquiryApiRepository>(
    repo: &R,
    id: String,
    req: InquiryReadRequest,
) -> Result<Value> {
    let mut entity = repo.read(&id)?;
    entity.read = req.read;
    repo.update(&entity)?;

    Ok(serde_json::json!({
        "id": entity.id,
        "read": entity.read,
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
    struct MockInquiryAdapter {
        state: Mutex<HashMap<String, InquiryEntity>>,
    }

    impl RecordFsAdapterTrait<InquiryEntity> for MockInquiryAdapter {
        fn new() -> Self
        where
            Self: Sized,
        {
            Self::default()
        }

        fn read(&self, id: &str) -> Result<InquiryEntity> {
            self.state
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| RecordNotFound::new("Inquiry", id).into())
        }

        fn list(&self) -> Result<Vec<InquiryEntity>> {
            Ok(self.state.lock().unwrap().values().cloned().collect())
        }

        fn insert(&self, data: &InquiryEntity) -> Result<()> {
            self.state
                .lock()
                .unwrap()
                .insert(data.id.clone(), data.clone());
            Ok(())
        }

        fn update(&self, data: &InquiryEntity) -> Result<()> {
            self.insert(data)
        }

        fn delete(&self, id: &str) -> Result<()> {
            self.state.lock().unwrap().remove(id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockInquiryRepository {
        adapter: MockInquiryAdapter,
    }

    impl InquiryApiRepository for MockInquiryRepository {
        fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<InquiryEntity> {
            &self.adapter
        }
    }

    #[tokio::test]
    async fn create_starts_unread_and_read_patch_flips_it() {
        let repo = MockInquiryRepository::default();
        let payload: InquiryCreateRequest = serde_json::from_value(json!({
            "name": "Alex",
            "email": "alex@example.com",
            "message": "Is the estate still available?"
        }))
        .unwrap();

        let created = create_inquiry_with_repo(&repo, payload).await.unwrap();
        assert!(!created.read);

        set_inquiry_read_with_repo(&repo, created.id.clone(), InquiryReadRequest { read: true })
            .await
            .unwrap();

        assert!(repo.read(&created.id).unwrap().read);
    }

    #[tokio::test]
    async fn unread_filter_excludes_handled_inquiries() {
        let repo = MockInquiryRepository::default();
        for i in 0..3 {
            let payload: InquiryCreateRequest = serde_json::from_value(json!({
                "name": "P",
                "email": "p@example.com",
                "message": format!("message {i}")
            }))
            .unwrap();
            let created = create_inquiry_with_repo(&repo, payload).await.unwrap();
            if i == 0 {
                set_inquiry_read_with_repo(&repo, created.id, InquiryReadRequest { read: true })
                    .await
                    .unwrap();
            }
        }

        let q: InquiryListQuery = serde_json::from_value(json!({ "unread": true })).unwrap();
        let page = list_inquiries_with_repo(&repo, q).await.unwrap();
        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|i| !i.read));
    }
}
