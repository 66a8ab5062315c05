use super::*;

/// Tests creating a championship.
///
/// Expected: Ok with the championship active and without files
#[tokio::test]
async fn creates_active_championship() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Championship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .role("ADMIN")
        .build()
        .await?;

    let championship = ChampionshipRepository::new(db)
        .create(CreateChampionshipParam {
            user_id: admin.id,
            title: "Winter Cup".to_string(),
            description: Some("Three stages on ice".to_string()),
            stages_count: 3,
        })
        .await?;

    assert_eq!(championship.user_id, admin.id);
    assert_eq!(championship.title, "Winter Cup");
    assert!(championship.is_active);
    assert!(championship.files.is_empty());

    Ok(())
}

/// Tests creating a championship for a user that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Championship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ChampionshipRepository::new(db)
        .create(CreateChampionshipParam {
            user_id: 999_999,
            title: "Ghost Cup".to_string(),
            description: None,
            stages_count: 1,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
