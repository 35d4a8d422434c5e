//! Choice factory for creating test answer choices.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a choice for a question.
///
/// # Arguments
/// - `db` - Database connection
/// - `question_id` - Question the choice belongs to
/// - `text` - Choice text
/// - `correct` - Whether the choice is the correct answer
///
/// # Returns
/// - `Ok(entity::choice::Model)` - Created choice entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_choice(
    db: &DatabaseConnection,
    question_id: i32,
    text: impl Into<String>,
    correct: bool,
) -> Result<entity::choice::Model, DbErr> {
    entity::choice::ActiveModel {
        question_id: ActiveValue::Set(question_id),
        text: ActiveValue::Set(text.into()),
        value: ActiveValue::Set(if correct { 1 } else { 0 }),
        ..Default::default()
    }
    .insert(db)
    .await
}
