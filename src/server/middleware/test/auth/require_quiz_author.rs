use super::*;

/// Tests the author of a quiz is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_author() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let author = factory::user::create_user(db).await?;
    let quiz = factory::quiz::create_quiz(db, author.id).await?;
    AuthSession::new(session).set_user_id(author.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::QuizAuthor(quiz.id)])
        .await?;

    assert_eq!(user.id, author.id);

    Ok(())
}

/// Tests another logged in user is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let author = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let quiz = factory::quiz::create_quiz(db, author.id).await?;
    AuthSession::new(session).set_user_id(other.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::QuizAuthor(quiz.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, other.id);
            assert!(message.contains("author"));
        }
        unexpected => panic!("Expected AccessDenied, got {:?}", unexpected.map(|u| u.id)),
    }

    Ok(())
}

/// Tests a permission on a missing quiz.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_quiz() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::QuizAuthor(999)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
