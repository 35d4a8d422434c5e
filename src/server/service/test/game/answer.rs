use super::*;
use test_utils::factory::helpers::correct_and_wrong_choice;

/// Tests a correct answer moves forward to the next question.
///
/// Expected: Playing, position 1, question 2
#[tokio::test]
async fn correct_answer_advances() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 20).await?;
    let service = GameService::new(db);
    let player = service.start("Ada", quiz.id, Difficulty::Easy).await?;
    let (correct, _wrong) = correct_and_wrong_choice(db, questions[0].id).await?;

    let outcome = service.answer(player, correct.id).await?;

    assert_eq!(outcome.status, GameStatus::Playing);
    assert!(outcome.correct);
    assert_eq!(outcome.player.position, 1);
    assert_eq!(outcome.player.correct_answer, 1);
    assert_eq!(outcome.player.current_question_id, Some(questions[1].id));

    Ok(())
}

/// Tests a wrong answer on easy keeps the position.
///
/// Expected: Playing, position unchanged, wrong counter incremented
#[tokio::test]
async fn wrong_answer_on_easy_keeps_position() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 20).await?;
    let created = factory::player::PlayerFactory::new(db, quiz.id)
        .position(3)
        .current_question(Some(questions[3].id))
        .build()
        .await?;
    factory::timer::create_timer(db, created.id, Utc::now(), None).await?;
    let (_correct, wrong) = correct_and_wrong_choice(db, questions[3].id).await?;

    let service = GameService::new(db);
    let player = service.find_player(quiz.id, created.id).await?;
    let outcome = service.answer(player, wrong.id).await?;

    assert_eq!(outcome.status, GameStatus::Playing);
    assert!(!outcome.correct);
    assert_eq!(outcome.player.position, 3);
    assert_eq!(outcome.player.wrong_answer, 1);
    assert_eq!(outcome.player.current_question_id, Some(questions[4].id));

    Ok(())
}

/// Tests a wrong answer on medium moves backward.
///
/// Expected: position decremented
#[tokio::test]
async fn wrong_answer_on_medium_moves_backward() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 20).await?;
    let created = factory::player::PlayerFactory::new(db, quiz.id)
        .difficulty(1)
        .position(6)
        .current_question(Some(questions[8].id))
        .build()
        .await?;
    factory::timer::create_timer(db, created.id, Utc::now(), None).await?;
    let (_correct, wrong) = correct_and_wrong_choice(db, questions[8].id).await?;

    let service = GameService::new(db);
    let player = service.find_player(quiz.id, created.id).await?;
    let outcome = service.answer(player, wrong.id).await?;

    assert_eq!(outcome.player.position, 5);

    Ok(())
}

/// Tests reaching position 15 wins the game.
///
/// Expected: Achieved with time spent recorded
#[tokio::test]
async fn reaching_finish_line_achieves() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 20).await?;
    let created = factory::player::PlayerFactory::new(db, quiz.id)
        .position(14)
        .current_question(Some(questions[16].id))
        .build()
        .await?;
    factory::timer::create_timer(db, created.id, Utc::now() - Duration::seconds(45), None)
        .await?;
    let (correct, _wrong) = correct_and_wrong_choice(db, questions[16].id).await?;

    let service = GameService::new(db);
    let player = service.find_player(quiz.id, created.id).await?;
    let outcome = service.answer(player, correct.id).await?;

    assert_eq!(outcome.status, GameStatus::Achieved);
    assert_eq!(outcome.player.position, 15);
    assert!(!outcome.player.is_playing);
    assert!(outcome.player.is_achieved);
    assert!(outcome.player.time_spent.unwrap() >= 45);

    Ok(())
}

/// Tests running out of questions before the finish line loses the game.
///
/// Expected: Failed
#[tokio::test]
async fn running_out_of_questions_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 20).await?;
    let created = factory::player::PlayerFactory::new(db, quiz.id)
        .position(10)
        .current_question(Some(questions[19].id))
        .build()
        .await?;
    factory::timer::create_timer(db, created.id, Utc::now(), None).await?;
    let (correct, _wrong) = correct_and_wrong_choice(db, questions[19].id).await?;

    let service = GameService::new(db);
    let player = service.find_player(quiz.id, created.id).await?;
    let outcome = service.answer(player, correct.id).await?;

    assert_eq!(outcome.status, GameStatus::Failed);
    assert_eq!(outcome.player.position, 11);
    assert!(outcome.player.is_failed);
    assert!(!outcome.player.is_playing);
    assert!(outcome.player.time_spent.is_some());

    Ok(())
}

/// Tests a hard game past its time limit ends in a timeout.
///
/// Expected: Timeout without counting the answer
#[tokio::test]
async fn hard_game_past_limit_times_out() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 20).await?;
    let created = factory::player::PlayerFactory::new(db, quiz.id)
        .difficulty(2)
        .position(5)
        .current_question(Some(questions[5].id))
        .build()
        .await?;
    factory::timer::create_timer(
        db,
        created.id,
        Utc::now() - Duration::seconds(HARD_TIME_LIMIT as i64 + 1),
        Some(HARD_TIME_LIMIT),
    )
    .await?;
    let (correct, _wrong) = correct_and_wrong_choice(db, questions[5].id).await?;

    let service = GameService::new(db);
    let player = service.find_player(quiz.id, created.id).await?;
    let outcome = service.answer(player, correct.id).await?;

    assert_eq!(outcome.status, GameStatus::Timeout);
    assert!(outcome.player.is_timeout);
    assert!(!outcome.player.is_playing);
    assert_eq!(outcome.player.position, 5);
    assert_eq!(outcome.player.correct_answer, 0);

    Ok(())
}

/// Tests a choice from another question is rejected.
///
/// Expected: Err(BadRequest) and the player unchanged
#[tokio::test]
async fn rejects_choice_of_other_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 20).await?;
    let service = GameService::new(db);
    let player = service.start("Ada", quiz.id, Difficulty::Easy).await?;
    let (other_correct, _wrong) = correct_and_wrong_choice(db, questions[1].id).await?;

    let result = service.answer(player.clone(), other_correct.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let reloaded = PlayerRepository::new(db).find_by_id(player.id).await?.unwrap();
    assert_eq!(reloaded.position, 0);

    Ok(())
}

/// Tests answering after the game is over.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_finished_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 20).await?;
    let created = factory::player::PlayerFactory::new(db, quiz.id)
        .current_question(Some(questions[0].id))
        .achieved(20)
        .build()
        .await?;
    let (correct, _wrong) = correct_and_wrong_choice(db, questions[0].id).await?;

    let service = GameService::new(db);
    let player = service.find_player(quiz.id, created.id).await?;
    let result = service.answer(player, correct.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
