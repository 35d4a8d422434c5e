//! Business logic between the controllers and the data layer.

pub mod auth;
pub mod game;
pub mod leaderboard;
pub mod quiz;

#[cfg(test)]
mod test;
