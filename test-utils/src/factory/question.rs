//! Question factory for creating test question entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test questions.
///
/// Defaults the text to `"Question {number}"`.
pub struct QuestionFactory<'a> {
    db: &'a DatabaseConnection,
    quiz_id: i32,
    number: i32,
    text: String,
}

impl<'a> QuestionFactory<'a> {
    /// Creates a new QuestionFactory.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `quiz_id` - Quiz the question belongs to
    /// - `number` - 1-based position of the question within the quiz
    pub fn new(db: &'a DatabaseConnection, quiz_id: i32, number: i32) -> Self {
        Self {
            db,
            quiz_id,
            number,
            text: format!("Question {}", number),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builds and inserts the question entity into the database.
    pub async fn build(self) -> Result<entity::question::Model, DbErr> {
        entity::question::ActiveModel {
            quiz_id: ActiveValue::Set(self.quiz_id),
            number: ActiveValue::Set(self.number),
            text: ActiveValue::Set(self.text),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a question with default text.
pub async fn create_question(
    db: &DatabaseConnection,
    quiz_id: i32,
    number: i32,
) -> Result<entity::question::Model, DbErr> {
    QuestionFactory::new(db, quiz_id, number).build().await
}
