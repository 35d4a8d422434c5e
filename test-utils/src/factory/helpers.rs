//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author and a quiz with `question_count` questions.
///
/// Each question is numbered from 1 and has 4 choices named `"Q{n} choice {j}"`,
/// where the first choice is the correct one.
///
/// # Returns
/// - `Ok((author, quiz, questions))` - Created entities, questions ordered by number
/// - `Err(DbErr)` - Database error during creation
pub async fn create_full_quiz(
    db: &DatabaseConnection,
    question_count: i32,
) -> Result<
    (
        entity::user::Model,
        entity::quiz::Model,
        Vec<entity::question::Model>,
    ),
    DbErr,
> {
    let author = crate::factory::user::create_user(db).await?;
    let quiz = crate::factory::quiz::create_quiz(db, author.id).await?;
    let questions = create_questions_with_choices(db, quiz.id, question_count).await?;

    Ok((author, quiz, questions))
}

/// Creates `question_count` numbered questions with 4 choices each for a quiz.
///
/// The first choice of every question is correct.
pub async fn create_questions_with_choices(
    db: &DatabaseConnection,
    quiz_id: i32,
    question_count: i32,
) -> Result<Vec<entity::question::Model>, DbErr> {
    let mut questions = Vec::with_capacity(question_count.max(0) as usize);

    for number in 1..=question_count {
        let question = crate::factory::question::create_question(db, quiz_id, number).await?;
        for j in 1..=4 {
            crate::factory::choice::create_choice(
                db,
                question.id,
                format!("Q{} choice {}", number, j),
                j == 1,
            )
            .await?;
        }
        questions.push(question);
    }

    Ok(questions)
}

/// Returns the correct and one wrong choice of a question.
///
/// # Returns
/// - `Ok((correct, wrong))` - The correct choice and the first wrong choice
/// - `Err(DbErr::RecordNotFound)` - Question lacks a correct or wrong choice
pub async fn correct_and_wrong_choice(
    db: &DatabaseConnection,
    question_id: i32,
) -> Result<(entity::choice::Model, entity::choice::Model), DbErr> {
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

    let choices = entity::prelude::Choice::find()
        .filter(entity::choice::Column::QuestionId.eq(question_id))
        .order_by_asc(entity::choice::Column::Id)
        .all(db)
        .await?;

    let correct = choices.iter().find(|c| c.value == 1).cloned();
    let wrong = choices.iter().find(|c| c.value == 0).cloned();

    match (correct, wrong) {
        (Some(correct), Some(wrong)) => Ok((correct, wrong)),
        _ => Err(DbErr::RecordNotFound(format!(
            "Question {} has no correct/wrong choice pair",
            question_id
        ))),
    }
}
