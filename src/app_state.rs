use std::sync::Arc;

macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                $path($($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub booking_service: Arc<BookingService>,
    pub inquiry_service: Arc<InquiryService>,
    pub settings_service: Arc<SettingsService>,
    pub upload_service: Arc<UploadService>,
    pub system_service: Arc<SystemService>,
}

pub fn build_app_state() -> AppState {
    AppState {
        catalog_service: Arc::new(CatalogService),
        booking_service: Arc::new(BookingService),
        inquiry_service: Arc::new(InquiryService),
        settings_service: Arc::new(SettingsService),
        upload_service: Arc::new(UploadService),
        system_service: Arc::new(SystemService),
    }
}

#[derive(Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    delegate_async_service! {
        fn list_vehicles(q: crate::api::dto::catalog_dto::VehicleListQuery) -> crate::api::dto::paginated_response::PaginatedResponse<crate::core::persistence::vehicle::vehicle_entity::VehicleEntity> => crate::domain::catalog::service::vehicle_service::list_vehicles;
        fn get_vehicle(id: String) -> crate::core::persistence::vehicle::vehicle_entity::VehicleEntity => crate::domain::catalog::service::vehicle_service::get_vehicle;
        fn create_vehicle(req: crate::domain::catalog::dto::vehicle_create_request::VehicleCreateRequest) -> crate::core::persistence::vehicle::vehicle_entity::VehicleEntity => crate::domain::catalog::service::vehicle_service::create_vehicle;
        fn update_vehicle(id: String, req: crate::domain::catalog::dto::vehicle_update_request::VehicleUpdateRequest) -> crate::core::persistence::vehicle::vehicle_entity::VehicleEntity => crate::domain::catalog::service::vehicle_service::update_vehicle;
        fn set_vehicle_status(id: String, req: crate::domain::catalog::dto::vehicle_update_request::VehicleStatusRequest) -> serde_json::Value => crate::domain::catalog::service::vehicle_service::set_vehicle_status;
        fn delete_vehicle(id: String) -> serde_json::Value => crate::domain::catalog::service::vehicle_service::delete_vehicle;
    }
}

#[derive(Clone, Default)]
pub struct BookingService;

impl BookingService {
    delegate_async_service! {
        fn create_booking(req: crate::domain::booking::dto::booking_create_request::BookingCreateRequest) -> crate::core::persistence::booking::booking_entity::BookingEntity => crate::domain::booking::service::booking_service::create_booking;
        fn list_bookings(q: crate::api::dto::booking_dto::BookingListQuery) -> crate::api::dto::paginated_response::PaginatedResponse<crate::core::persistence::booking::booking_entity::BookingEntity> => crate::domain::booking::service::booking_service::list_bookings;
        fn get_booking(id: String) -> crate::core::persistence::booking::booking_entity::BookingEntity => crate::domain::booking::service::booking_service::get_booking;
        fn set_booking_status(id: String, req: crate::domain::booking::dto::booking_create_request::BookingStatusRequest) -> serde_json::Value => crate::domain::booking::service::booking_service::set_booking_status;
        fn delete_booking(id: String) -> serde_json::Value => crate::domain::booking::service::booking_service::delete_booking;
    }
}

#[derive(Clone, Default)]
pub struct InquiryService;

impl InquiryService {
    delegate_async_service! {
        fn create_inquiry(req: crate::domain::inquiry::dto::inquiry_create_request::InquiryCreateRequest) -> crate::core::persistence::inquiry::inquiry_entity::InquiryEntity => crate::domain::inquiry::service::inquiry_service::create_inquiry;
        fn list_inquiries(q: crate::api::dto::inquiry_dto::InquiryListQuery) -> crate::api::dto::paginated_response::PaginatedResponse<crate::core::persistence::inquiry::inquiry_entity::InquiryEntity> => crate::domain::inquiry::service::inquiry_service::list_inquiries;
        fn get_inquiry(id: String) -> crate::core::persistence::inquiry::inquiry_entity::InquiryEntity => crate::domain::inquiry::service::inquiry_service::get_inquiry;
        fn set_inquiry_read(id: String, req: crate::domain::inquiry::dto::inquiry_create_request::InquiryReadRequest) -> serde_json::Value => crate::domain::inquiry::service::inquiry_service::set_inquiry_read;
        fn delete_inquiry(id: String) -> serde_json::Value => crate::domain::inquiry::service::inquiry_service::delete_inquiry;
    }
}

#[derive(Clone, Default)]
pub struct SettingsService;

impl SettingsService {
    delegate_async_service! {
        fn get_site_settings() -> crate::core::persistence::settings::site_settings_entity::SiteSettingsEntity => crate::domain::settings::service::site_settings_service::get_site_settings;
        fn upsert_site_settings(req: crate::domain::settings::dto::site_settings_upsert_request::SiteSettingsUpsertRequest) -> serde_json::Value => crate::domain::settings::service::site_settings_service::upsert_site_settings;
    }
}

#[derive(Clone, Default)]
pub struct UploadService;

impl UploadService {
    pub async fn store_image(
        &self,
        original_name: String,
        bytes: Vec<u8>,
    ) -> anyhow::Result<serde_json::Value> {
        crate::domain::upload::service::upload_service::store_image(&original_name, &bytes).await
    }
}

#[derive(Clone, Default)]
pub struct SystemService;

impl SystemService {
    delegate_async_service! {
        fn status() -> serde_json::Value => crate::domain::system::service::status_service::status;
        fn health() -> serde_json::Value => crate::domain::system::service::health_service::health;
    }
}
