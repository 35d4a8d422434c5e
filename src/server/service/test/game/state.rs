use super::*;

/// Tests the game state holds the current question and timer.
///
/// Expected: question 1 with 4 choices and a hard time limit
#[tokio::test]
async fn returns_current_question_and_timer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 20).await?;
    let service = GameService::new(db);
    let player = service.start("Ada", quiz.id, Difficulty::Hard).await?;

    let state = service.state(quiz.id, player.id).await?;

    assert_eq!(state.quiz.id, quiz.id);
    let question = state.question.unwrap();
    assert_eq!(question.question.id, questions[0].id);
    assert_eq!(question.choices.len(), 4);
    assert_eq!(state.timer.unwrap().time_limit, Some(HARD_TIME_LIMIT));

    Ok(())
}

/// Tests a player looked up through the wrong quiz.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_player_of_other_quiz() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let other_quiz = factory::quiz::create_quiz(db, author.id).await?;
    let player = GameService::new(db)
        .start("Ada", quiz.id, Difficulty::Easy)
        .await?;

    let result = GameService::new(db).state(other_quiz.id, player.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a finished game has no current question.
///
/// Expected: question None
#[tokio::test]
async fn finished_game_has_no_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let created = factory::player::PlayerFactory::new(db, quiz.id)
        .current_question(Some(questions[0].id))
        .achieved(12)
        .build()
        .await?;

    let state = GameService::new(db).state(quiz.id, created.id).await?;

    assert!(state.question.is_none());
    assert_eq!(state.player.status(), GameStatus::Achieved);

    Ok(())
}

/// Tests the result of a finished game.
///
/// Expected: quiz and player with the stored time and counters
#[tokio::test]
async fn result_returns_final_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let created = factory::player::PlayerFactory::new(db, quiz.id)
        .current_question(None)
        .achieved(42)
        .build()
        .await?;

    let (result_quiz, player) = GameService::new(db).result(quiz.id, created.id).await?;

    assert_eq!(result_quiz.id, quiz.id);
    assert_eq!(player.id, created.id);
    assert_eq!(player.time_spent, Some(42));
    assert_eq!(player.status(), GameStatus::Achieved);

    Ok(())
}
