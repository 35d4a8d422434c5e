//! Domain models used between the data, service and controller layers.
//!
//! Repositories convert entity models into these types at the database boundary
//! and controllers convert them into DTOs at the HTTP boundary.

pub mod player;
pub mod quiz;
pub mod timer;
pub mod user;
