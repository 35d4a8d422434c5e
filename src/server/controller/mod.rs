//! HTTP request handlers.
//!
//! Controllers check access, convert DTOs into parameters, call a service and
//! convert the returned domain models back into DTOs.

pub mod auth;
pub mod game;
pub mod leaderboard;
pub mod quiz;
pub mod user;
