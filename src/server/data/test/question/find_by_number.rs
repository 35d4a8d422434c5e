use super::*;

/// Tests finding questions by their number within a quiz.
///
/// Expected: Ok(Some) for existing numbers, Ok(None) past the last question
#[tokio::test]
async fn finds_question_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 5).await?;

    let repo = QuestionRepository::new(db);

    let first = repo.find_by_number(quiz.id, 1).await?;
    assert_eq!(first.map(|q| q.id), Some(questions[0].id));

    let last = repo.find_by_number(quiz.id, 5).await?;
    assert_eq!(last.map(|q| q.id), Some(questions[4].id));

    assert!(repo.find_by_number(quiz.id, 6).await?.is_none());

    Ok(())
}

/// Tests numbers are scoped to their quiz.
///
/// Expected: Ok(None) when asking another quiz for the number
#[tokio::test]
async fn scopes_number_to_quiz() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _quiz, _questions) = factory::helpers::create_full_quiz(db, 2).await?;
    let empty_quiz = factory::quiz::create_quiz(db, author.id).await?;

    let repo = QuestionRepository::new(db);

    assert!(repo.find_by_number(empty_quiz.id, 1).await?.is_none());

    Ok(())
}
