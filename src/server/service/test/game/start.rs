use super::*;

/// Tests starting a hard game creates a player and a limited timer.
///
/// Expected: Ok(Player) on question 1 with a 60 second timer
#[tokio::test]
async fn starts_hard_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 20).await?;

    let service = GameService::new(db);
    let player = service.start("  Ada  ", quiz.id, Difficulty::Hard).await?;

    assert_eq!(player.name, "Ada");
    assert_eq!(player.current_question_id, Some(questions[0].id));
    assert_eq!(player.position, 0);
    assert!(player.is_playing);

    let timer = TimerRepository::new(db)
        .find_by_player(player.id)
        .await?
        .unwrap();
    assert_eq!(timer.time_limit, Some(HARD_TIME_LIMIT));
    assert_eq!(timer.elapsed_seconds(), Some(0));

    Ok(())
}

/// Tests easy and medium games have no time limit.
///
/// Expected: timer without limit
#[tokio::test]
async fn starts_untimed_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;

    let player = GameService::new(db)
        .start("Grace", quiz.id, Difficulty::Medium)
        .await?;

    let timer = TimerRepository::new(db)
        .find_by_player(player.id)
        .await?
        .unwrap();
    assert_eq!(timer.time_limit, None);

    Ok(())
}

/// Tests a blank player name is rejected.
///
/// Expected: Err(BadRequest) with the missing name message
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;

    let result = GameService::new(db)
        .start("   ", quiz.id, Difficulty::Easy)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == MISSING_PLAYER_NAME_MESSAGE));

    Ok(())
}

/// Tests starting a game of a missing quiz.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_quiz() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db)
        .start("Ada", 404, Difficulty::Easy)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests starting a game of a quiz without questions.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_quiz_without_first_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let quiz = factory::quiz::create_quiz(db, author.id).await?;

    let result = GameService::new(db)
        .start("Ada", quiz.id, Difficulty::Easy)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests reserved test players are reset instead of duplicated.
///
/// Expected: same player id, reset progress, new difficulty
#[tokio::test]
async fn resets_existing_test_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 5).await?;
    let existing = factory::player::PlayerFactory::new(db, quiz.id)
        .name("player_test_5_q")
        .position(4)
        .current_question(Some(questions[4].id))
        .achieved(30)
        .build()
        .await?;

    let player = GameService::new(db)
        .start("player_test_5_q", quiz.id, Difficulty::Hard)
        .await?;

    assert_eq!(player.id, existing.id);
    assert_eq!(player.position, 0);
    assert_eq!(player.difficulty, Difficulty::Hard);
    assert_eq!(player.current_question_id, Some(questions[0].id));
    assert_eq!(player.status(), GameStatus::Playing);
    assert_eq!(player.time_spent, None);

    Ok(())
}

/// Tests ordinary names always create a new player.
///
/// Expected: two distinct players with the same name
#[tokio::test]
async fn creates_new_player_for_repeated_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;

    let service = GameService::new(db);
    let first = service.start("Ada", quiz.id, Difficulty::Easy).await?;
    let second = service.start("Ada", quiz.id, Difficulty::Easy).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
