use super::*;

/// Tests looking up a named player within a quiz.
///
/// Expected: Ok(Some) in the player's own quiz, Ok(None) in another quiz
#[tokio::test]
async fn finds_player_by_name_within_quiz() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let other_quiz = factory::quiz::create_quiz(db, author.id).await?;
    let created = factory::player::PlayerFactory::new(db, quiz.id)
        .name("player_test_5_q")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);

    let found = repo.find_by_quiz_and_name(quiz.id, "player_test_5_q").await?;
    assert_eq!(found.map(|p| p.id), Some(created.id));

    let missing = repo
        .find_by_quiz_and_name(other_quiz.id, "player_test_5_q")
        .await?;
    assert!(missing.is_none());

    Ok(())
}
