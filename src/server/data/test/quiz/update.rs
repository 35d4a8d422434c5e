use super::*;

/// Tests rewriting a quiz's topic, questions and correct choices.
///
/// Expected: Ok(Some(Quiz)) with new texts and the newly selected choice correct
#[tokio::test]
async fn rewrites_quiz_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let repo = QuizRepository::new(db);
    let quiz = repo.create(author.id, quiz_params("Before")).await?;

    let mut params = quiz_params("After");
    params.questions[0].correct_index = 3;
    params.questions[0].choices[3] = "Edited answer".to_string();

    let updated = repo.update(quiz.id, params).await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().topic, "After");

    let questions = QuestionRepository::new(db)
        .get_by_quiz_with_choices(quiz.id)
        .await?;

    assert_eq!(questions.len(), 20);
    assert_eq!(questions[0].question.text, "After question 1");
    assert_eq!(questions[19].question.text, "After question 20");

    let first = &questions[0].choices;
    assert!(!first[1].correct);
    assert!(first[3].correct);
    assert_eq!(first[3].text, "Edited answer");
    assert_eq!(first.iter().filter(|c| c.correct).count(), 1);

    Ok(())
}

/// Tests updating a quiz that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_quiz() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuizRepository::new(db);
    let result = repo.update(12345, quiz_params("Nothing")).await?;

    assert!(result.is_none());

    Ok(())
}
