use super::*;

/// Tests the leaderboard query.
///
/// Only achieved players of the requested difficulty are returned, fastest first
/// with ties ordered by id.
///
/// Expected: ids in order fast, tie_a, tie_b
#[tokio::test]
async fn returns_achieved_players_fastest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;

    let tie_a = factory::player::PlayerFactory::new(db, quiz.id)
        .difficulty(1)
        .achieved(40)
        .build()
        .await?;
    let fast = factory::player::PlayerFactory::new(db, quiz.id)
        .difficulty(1)
        .achieved(25)
        .build()
        .await?;
    let tie_b = factory::player::PlayerFactory::new(db, quiz.id)
        .difficulty(1)
        .achieved(40)
        .build()
        .await?;
    // Other difficulty and unfinished players are excluded
    factory::player::PlayerFactory::new(db, quiz.id)
        .difficulty(2)
        .achieved(10)
        .build()
        .await?;
    factory::player::PlayerFactory::new(db, quiz.id)
        .difficulty(1)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let players = repo.get_achieved(quiz.id, Difficulty::Medium).await?;

    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![fast.id, tie_a.id, tie_b.id]);

    Ok(())
}
