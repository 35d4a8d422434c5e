use super::*;

/// Tests upvotes and downvotes of different players increment their own counters.
///
/// Expected: upvotes 2, downvotes 1
#[tokio::test]
async fn increments_vote_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let quiz = factory::quiz::create_quiz(db, author.id).await?;
    let first = factory::player::create_player(db, quiz.id).await?;
    let second = factory::player::create_player(db, quiz.id).await?;
    let third = factory::player::create_player(db, quiz.id).await?;

    let repo = QuizRepository::new(db);
    repo.add_vote(quiz.id, first.id, true).await?;
    repo.add_vote(quiz.id, second.id, false).await?;
    let quiz = repo.add_vote(quiz.id, third.id, true).await?.unwrap();

    assert_eq!(quiz.upvotes, 2);
    assert_eq!(quiz.downvotes, 1);

    Ok(())
}

/// Tests a player whose vote is already spent does not move the counters.
///
/// Expected: counters stay at 0, quiz still returned
#[tokio::test]
async fn ignores_spent_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let quiz = factory::quiz::create_quiz(db, author.id).await?;
    let player = factory::player::PlayerFactory::new(db, quiz.id)
        .has_vote(false)
        .build()
        .await?;

    let quiz = QuizRepository::new(db)
        .add_vote(quiz.id, player.id, true)
        .await?
        .unwrap();

    assert_eq!(quiz.upvotes, 0);
    assert_eq!(quiz.downvotes, 0);

    Ok(())
}

/// Tests the vote flag is cleared together with the counter increment.
///
/// Expected: player has_vote false after voting
#[tokio::test]
async fn clears_player_vote_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let quiz = factory::quiz::create_quiz(db, author.id).await?;
    let player = factory::player::create_player(db, quiz.id).await?;

    QuizRepository::new(db)
        .add_vote(quiz.id, player.id, false)
        .await?;

    let stored = entity::prelude::Player::find_by_id(player.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.has_vote);

    Ok(())
}

/// Tests a player cannot vote on a quiz they are not playing.
///
/// Expected: counters of the other quiz stay at 0
#[tokio::test]
async fn ignores_player_of_other_quiz() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let quiz = factory::quiz::create_quiz(db, author.id).await?;
    let other = factory::quiz::create_quiz(db, author.id).await?;
    let player = factory::player::create_player(db, other.id).await?;

    let quiz = QuizRepository::new(db)
        .add_vote(quiz.id, player.id, true)
        .await?
        .unwrap();

    assert_eq!(quiz.upvotes, 0);

    Ok(())
}
