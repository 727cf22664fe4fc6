pub mod inquiry_create_request;
