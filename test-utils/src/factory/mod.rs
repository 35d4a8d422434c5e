//! Factory methods for creating test data.
//!
//! Factories create entities with sensible defaults so tests only spell out the
//! fields they care about. Each entity has its own module with a `Factory` builder
//! for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let quiz = factory::quiz::create_quiz(&db, user.id).await?;
//!
//!     // Create a playable quiz with 20 questions of 4 choices each
//!     let (author, quiz, questions) = factory::helpers::create_full_quiz(&db, 20).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let player = factory::player::PlayerFactory::new(&db, quiz.id)
//!     .name("player_test_5_q")
//!     .difficulty(2)
//!     .position(14)
//!     .current_question(Some(question.id))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create quiz author entities
//! - `quiz` - Create quiz entities
//! - `question` - Create question entities
//! - `choice` - Create choice entities
//! - `player` - Create player entities
//! - `timer` - Create timer entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod choice;
pub mod helpers;
pub mod player;
pub mod question;
pub mod quiz;
pub mod timer;
pub mod user;

pub use choice::create_choice;
pub use player::create_player;
pub use question::create_question;
pub use quiz::create_quiz;
pub use timer::create_timer;
pub use user::create_user;
