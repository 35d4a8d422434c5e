use super::*;

/// Tests a new player starts at position 0 on the first question.
///
/// Expected: Ok(Player) playing, with zeroed counters and a vote available
#[tokio::test]
async fn creates_player_at_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, questions) = factory::helpers::create_full_quiz(db, 2).await?;

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(CreatePlayerParams {
            quiz_id: quiz.id,
            name: "Grace".to_string(),
            difficulty: Difficulty::Medium,
            first_question_id: questions[0].id,
        })
        .await?;

    assert_eq!(player.name, "Grace");
    assert_eq!(player.position, 0);
    assert_eq!(player.difficulty, Difficulty::Medium);
    assert_eq!(player.current_question_id, Some(questions[0].id));
    assert_eq!(player.status(), GameStatus::Playing);
    assert!(player.is_playing);
    assert!(player.has_vote);
    assert_eq!(player.time_spent, None);

    Ok(())
}
