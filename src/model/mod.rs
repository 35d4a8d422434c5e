//! Data transfer objects shared between the server API and the web client.
//!
//! Every type here is serialized as JSON over `/api`. Schemas are only derived for
//! OpenAPI documentation when the `server` feature is enabled.

pub mod api;
pub mod game;
pub mod leaderboard;
pub mod quiz;
pub mod user;
