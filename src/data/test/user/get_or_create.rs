use super::*;

/// Tests creating a user on first contact.
///
/// Expected: Ok with the user stored under the given id and role
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .get_or_create(CreateUserParam {
            id: 123456789,
            username: Some("sideways".to_string()),
            role: Role::Pilot,
        })
        .await?;

    assert_eq!(user.id, 123456789);
    assert_eq!(user.username.as_deref(), Some("sideways"));
    assert_eq!(user.role, Role::Pilot);

    Ok(())
}

/// Tests that an existing user keeps the stored role.
///
/// Verifies that calling get_or_create for a known id with a different role neither
/// changes the stored role nor creates a second row.
///
/// Expected: Ok with the originally stored role
#[tokio::test]
async fn keeps_existing_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .role("JUDGE")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .get_or_create(CreateUserParam {
            id: existing.id,
            username: Some("renamed".to_string()),
            role: Role::Admin,
        })
        .await?;

    assert_eq!(user.role, Role::Judge);
    assert_eq!(user.username, existing.username);

    let (_, total) = repo.get_all_paginated(0, 10).await?;
    assert_eq!(total, 1);

    Ok(())
}

/// Tests creating a user without a public username.
///
/// Expected: Ok with username None
#[tokio::test]
async fn creates_user_without_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .get_or_create(CreateUserParam {
            id: 42,
            username: None,
            role: Role::Pilot,
        })
        .await?;

    assert!(user.username.is_none());

    Ok(())
}
