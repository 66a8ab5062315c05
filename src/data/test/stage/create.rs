use super::*;

/// Tests creating a stage.
///
/// Expected: Ok with registration open
#[tokio::test]
async fn creates_open_stage() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let championship = factory::create_championship(db, admin.id).await?;
    let starts_at = Utc::now() + Duration::days(14);

    let stage = StageRepository::new(db)
        .create(CreateStageParam {
            championship_id: championship.id,
            number: 2,
            title: "Night Run".to_string(),
            description: None,
            location: "Moscow Raceway".to_string(),
            map_link: Some("https://maps.example.com/raceway".to_string()),
            starts_at,
        })
        .await?;

    assert_eq!(stage.championship_id, championship.id);
    assert_eq!(stage.number, 2);
    assert!(stage.is_active);
    assert!(stage.files.is_empty());

    Ok(())
}

/// Tests creating a stage for a championship that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_championship() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StageRepository::new(db)
        .create(CreateStageParam {
            championship_id: 404,
            number: 1,
            title: "Orphan".to_string(),
            description: None,
            location: "Nowhere".to_string(),
            map_link: None,
            starts_at: Utc::now(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
