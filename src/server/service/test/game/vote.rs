use super::*;

/// Tests a player can vote once.
///
/// Expected: first vote counted, second ignored
#[tokio::test]
async fn counts_single_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let service = GameService::new(db);
    let player = service.start("Ada", quiz.id, Difficulty::Easy).await?;

    let quiz_after_vote = service.vote(&player, true).await?;
    assert_eq!(quiz_after_vote.upvotes, 1);

    let player = service.find_player(quiz.id, player.id).await?;
    assert!(!player.has_vote);

    let quiz_after_second = service.vote(&player, false).await?;
    assert_eq!(quiz_after_second.upvotes, 1);
    assert_eq!(quiz_after_second.downvotes, 0);

    let stored = QuizRepository::new(db).find_by_id(quiz.id).await?.unwrap();
    assert_eq!(stored.upvotes, 1);

    Ok(())
}

/// Tests a downvote increments the downvote counter.
///
/// Expected: downvotes 1
#[tokio::test]
async fn counts_downvote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let service = GameService::new(db);
    let player = service.start("Ada", quiz.id, Difficulty::Easy).await?;

    let quiz = service.vote(&player, false).await?;

    assert_eq!(quiz.downvotes, 1);
    assert_eq!(quiz.upvotes, 0);

    Ok(())
}

/// Tests two simultaneous votes from the same player snapshot count once.
///
/// Expected: one upvote stored, both calls return the quiz
#[tokio::test]
async fn counts_concurrent_votes_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let service = GameService::new(db);
    let player = service.start("Ada", quiz.id, Difficulty::Easy).await?;

    let (first, second) = tokio::join!(service.vote(&player, true), service.vote(&player, true));
    first?;
    second?;

    let stored = QuizRepository::new(db).find_by_id(quiz.id).await?.unwrap();
    assert_eq!(stored.upvotes, 1);
    assert_eq!(stored.downvotes, 0);

    Ok(())
}

/// Tests a stale player snapshot cannot vote again after the vote was spent.
///
/// Expected: second vote with the outdated player leaves counters unchanged
#[tokio::test]
async fn ignores_stale_player_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, quiz, _questions) = factory::helpers::create_full_quiz(db, 1).await?;
    let service = GameService::new(db);
    let player = service.start("Ada", quiz.id, Difficulty::Easy).await?;

    service.vote(&player, true).await?;
    let quiz = service.vote(&player, false).await?;

    assert_eq!(quiz.upvotes, 1);
    assert_eq!(quiz.downvotes, 0);

    Ok(())
}
