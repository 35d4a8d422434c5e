use super::*;

/// Tests top quizzes are ordered by upvotes and capped at the limit.
///
/// Expected: the 5 most upvoted quizzes, ties ordered by id
#[tokio::test]
async fn orders_by_upvotes_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let mut ids = Vec::new();
    for upvotes in [3, 9, 1, 9, 0, 7, 2] {
        let quiz = factory::quiz::QuizFactory::new(db, author.id)
            .upvotes(upvotes)
            .build()
            .await?;
        ids.push(quiz.id);
    }

    let repo = QuizRepository::new(db);
    let top = repo.get_top(5).await?;

    let top_ids: Vec<i32> = top.iter().map(|q| q.id).collect();
    assert_eq!(top_ids, vec![ids[1], ids[3], ids[5], ids[0], ids[6]]);

    Ok(())
}

/// Tests an empty catalogue.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_quizzes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuizRepository::new(db);

    assert!(repo.get_top(5).await?.is_empty());

    Ok(())
}
