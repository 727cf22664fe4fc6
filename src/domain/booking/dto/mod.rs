pub mod booking_create_request;
