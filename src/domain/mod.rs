//! Domain services: one module per business area.

pub mod booking;
pub mod catalog;
pub mod inquiry;
pub mod settings;
pub mod system;
pub mod upload;
