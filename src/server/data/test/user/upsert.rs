use super::*;

/// Tests creating a new user on first login.
///
/// Expected: Ok(User) with the provided Google ID, name and email
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            google_id: "10001".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await?;

    assert_eq!(user.google_id, "10001");
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");

    Ok(())
}

/// Tests that logging in again refreshes the profile instead of duplicating the user.
///
/// Expected: Ok(User) with the same id and the new name and email
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .google_id("10002")
        .name("Old Name")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            google_id: "10002".to_string(),
            name: "New Name".to_string(),
            email: "new@example.com".to_string(),
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.name, "New Name");
    assert_eq!(user.email, "new@example.com");

    Ok(())
}
