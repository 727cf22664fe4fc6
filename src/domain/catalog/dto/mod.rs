pub mod vehicle_create_request;
pub mod vehicle_update_request;
