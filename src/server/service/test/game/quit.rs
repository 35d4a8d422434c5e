use super::*;

/// Tests quitting deletes an ordinary player.
///
/// Expected: Ok(true) and the player gone
#[tokio::test]
async fn deletes_ordinary_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let service = GameService::new(db);
    let player = service.start("Ada", quiz.id, Difficulty::Easy).await?;

    assert!(service.quit(&player).await?);
    assert!(PlayerRepository::new(db).find_by_id(player.id).await?.is_none());

    Ok(())
}

/// Tests quitting keeps reserved test players.
///
/// Expected: Ok(false) and the player still stored
#[tokio::test]
async fn keeps_test_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let service = GameService::new(db);
    let player = service
        .start("player_test_20_q", quiz.id, Difficulty::Easy)
        .await?;

    assert!(!service.quit(&player).await?);
    assert!(PlayerRepository::new(db).find_by_id(player.id).await?.is_some());

    Ok(())
}
