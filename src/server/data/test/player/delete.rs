use super::*;
use chrono::Utc;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a player also removes its timer.
///
/// Expected: Ok(true), no players or timers left
#[tokio::test]
async fn deletes_player_and_timer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let player = factory::player::create_player(db, quiz.id).await?;
    factory::timer::create_timer(db, player.id, Utc::now(), None).await?;

    let repo = PlayerRepository::new(db);
    let deleted = repo.delete(player.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(player.id).await?.is_none());
    assert_eq!(entity::prelude::Timer::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a player that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert!(!repo.delete(31).await?);

    Ok(())
}
