use super::*;

/// Tests deleting a quiz removes its questions, choices and players.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_quiz_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 3).await?;
    factory::player::PlayerFactory::new(db, quiz.id)
        .current_question(Some(questions[0].id))
        .build()
        .await?;

    let repo = QuizRepository::new(db);
    let deleted = repo.delete(quiz.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(quiz.id).await?.is_none());
    assert_eq!(entity::prelude::Question::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Choice::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Player::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a quiz that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_quiz() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuizRepository::new(db);

    assert!(!repo.delete(77).await?);

    Ok(())
}
