use super::*;

/// Tests stopping a timer measures time since the start point.
///
/// Expected: elapsed of at least 90 seconds and an expired hard limit
#[tokio::test]
async fn stops_timer_at_now() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let player = factory::player::create_player(db, quiz.id).await?;
    factory::timer::create_timer(db, player.id, Utc::now() - Duration::seconds(90), Some(60))
        .await?;

    let repo = TimerRepository::new(db);
    let timer = repo.stop(player.id).await?.unwrap();

    assert!(timer.elapsed_seconds().unwrap() >= 90);
    assert!(timer.is_expired());

    Ok(())
}

/// Tests stopping the timer of a player without one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_timer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimerRepository::new(db);

    assert!(repo.stop(1).await?.is_none());

    Ok(())
}
