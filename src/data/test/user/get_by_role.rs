use super::*;

/// Tests filtering users by role.
///
/// Expected: Ok with only the judges
#[tokio::test]
async fn returns_users_with_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let judge = factory::user::UserFactory::new(db)
        .role("JUDGE")
        .build()
        .await?;
    factory::user::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .role("ADMIN")
        .build()
        .await?;

    let judges = UserRepository::new(db).get_by_role(Role::Judge).await?;

    assert_eq!(judges.len(), 1);
    assert_eq!(judges[0].id, judge.id);

    Ok(())
}

/// Tests that an unreadable stored role is reported instead of skipped.
///
/// Expected: Err(AppError::Internal)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("REFEREE")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_id(user.id).await;

    assert!(matches!(result, Err(AppError::Internal(_))));

    Ok(())
}
