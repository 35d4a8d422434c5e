use super::*;

/// Tests creating a quiz with 20 questions and 80 choices.
///
/// Verifies questions are numbered from 1 and exactly one choice per question is correct.
///
/// Expected: Ok(Quiz) with all questions and choices stored
#[tokio::test]
async fn creates_quiz_with_questions_and_choices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let repo = QuizRepository::new(db);
    let quiz = repo.create(author.id, quiz_params("Rivers")).await?;

    assert_eq!(quiz.topic, "Rivers");
    assert_eq!(quiz.author_id, author.id);
    assert_eq!(quiz.upvotes, 0);
    assert_eq!(quiz.downvotes, 0);

    let questions = QuestionRepository::new(db)
        .get_by_quiz_with_choices(quiz.id)
        .await?;

    assert_eq!(questions.len(), 20);
    for (index, question) in questions.iter().enumerate() {
        assert_eq!(question.question.number, index as i32 + 1);
        assert_eq!(question.choices.len(), 4);
        let correct: Vec<_> = question.choices.iter().filter(|c| c.correct).collect();
        assert_eq!(correct.len(), 1);
        assert_eq!(correct[0].text, "Answer 2");
    }

    let choice_count = entity::prelude::Choice::find().count(db).await?;
    assert_eq!(choice_count, 80);

    Ok(())
}

/// Tests that a failed insert leaves nothing behind.
///
/// Uses an author that does not exist so the quiz insert violates its foreign key.
///
/// Expected: Err(DbErr) and no quizzes or questions stored
#[tokio::test]
async fn rolls_back_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuizRepository::new(db);
    let result = repo.create(999, quiz_params("Orphan")).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Quiz::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Question::find().count(db).await?, 0);

    Ok(())
}
