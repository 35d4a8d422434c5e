//! Data access layer.
//!
//! Repositories wrap a borrowed `DatabaseConnection`, run SeaORM queries and convert
//! entity models into domain models before returning them.

pub mod choice;
pub mod player;
pub mod question;
pub mod quiz;
pub mod timer;
pub mod user;

#[cfg(test)]
mod test;
