pub mod booking;
pub mod catalog;
pub mod inquiry;
pub mod setting;
pub mod system;
pub mod upload;
