use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests starting a timer sets start and end point to the same instant.
///
/// Expected: elapsed 0 and the given limit
#[tokio::test]
async fn starts_timer_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let player = factory::player::create_player(db, quiz.id).await?;

    let repo = TimerRepository::new(db);
    let timer = repo.start(player.id, Some(60)).await?;

    assert_eq!(timer.player_id, player.id);
    assert_eq!(timer.time_limit, Some(60));
    assert_eq!(timer.elapsed_seconds(), Some(0));

    Ok(())
}

/// Tests restarting replaces the existing timer instead of adding a second one.
///
/// Expected: one timer row, reset start point and cleared limit
#[tokio::test]
async fn restarts_existing_timer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let player = factory::player::create_player(db, quiz.id).await?;
    factory::timer::create_timer(db, player.id, Utc::now() - Duration::seconds(500), Some(60))
        .await?;

    let repo = TimerRepository::new(db);
    let timer = repo.start(player.id, None).await?;

    assert_eq!(timer.time_limit, None);
    assert_eq!(timer.elapsed_seconds(), Some(0));
    assert_eq!(entity::prelude::Timer::find().count(db).await?, 1);

    Ok(())
}
