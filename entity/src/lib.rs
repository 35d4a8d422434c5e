//! SeaORM entity models for the quiz schema.

pub mod prelude;

pub mod choice;
pub mod player;
pub mod question;
pub mod quiz;
pub mod timer;
pub mod user;
