use super::*;

/// Tests every mutable field is written back.
///
/// Expected: reloaded player matches the modified domain model
#[tokio::test]
async fn persists_game_progress() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 2).await?;
    let created = factory::player::PlayerFactory::new(db, quiz.id)
        .current_question(Some(questions[0].id))
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let mut player = repo.find_by_id(created.id).await?.unwrap();
    player.record_answer(true);
    player.current_question_id = Some(questions[1].id);
    player.finish(GameStatus::Failed, 12);

    repo.update(&player).await?;
    let reloaded = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(reloaded, player);
    assert_eq!(reloaded.status(), GameStatus::Failed);
    assert_eq!(reloaded.time_spent, Some(12));

    Ok(())
}
