#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod game;

#[cfg(feature = "web")]
pub mod leaderboard;

#[cfg(feature = "web")]
pub mod quiz;

#[cfg(feature = "web")]
pub mod user;
