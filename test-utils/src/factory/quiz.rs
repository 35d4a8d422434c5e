//! Quiz factory for creating test quiz entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test quizzes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let quiz = QuizFactory::new(&db, author.id)
///     .topic("Rust trivia")
///     .upvotes(10)
///     .build()
///     .await?;
/// ```
pub struct QuizFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    topic: String,
    upvotes: i32,
    downvotes: i32,
}

impl<'a> QuizFactory<'a> {
    /// Creates a new QuizFactory with default values.
    ///
    /// Defaults:
    /// - topic: `"Quiz {id}"`
    /// - upvotes / downvotes: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - ID of the user authoring the quiz
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            topic: format!("Quiz {}", id),
            upvotes: 0,
            downvotes: 0,
        }
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn upvotes(mut self, upvotes: i32) -> Self {
        self.upvotes = upvotes;
        self
    }

    pub fn downvotes(mut self, downvotes: i32) -> Self {
        self.downvotes = downvotes;
        self
    }

    /// Builds and inserts the quiz entity into the database.
    pub async fn build(self) -> Result<entity::quiz::Model, DbErr> {
        entity::quiz::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            topic: ActiveValue::Set(self.topic),
            upvotes: ActiveValue::Set(self.upvotes),
            downvotes: ActiveValue::Set(self.downvotes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a quiz with default values for the given author.
pub async fn create_quiz(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::quiz::Model, DbErr> {
    QuizFactory::new(db, author_id).build().await
}
