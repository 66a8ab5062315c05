use super::*;

/// Tests collecting taken numbers of a stage.
///
/// Expected: Ok with exactly the numbers of that stage's pilots
#[tokio::test]
async fn collects_stage_numbers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, championship, stage) =
        factory::helpers::create_stage_with_dependencies(db).await?;
    let other_stage = factory::stage::StageFactory::new(db, championship.id)
        .number(2)
        .build()
        .await?;
    factory::create_pilot(db, user.id, stage.id, 5).await?;
    factory::create_pilot(db, user.id, stage.id, 77).await?;
    factory::create_pilot(db, user.id, other_stage.id, 12).await?;

    let used = ParticipantRepository::new(db)
        .get_used_numbers(stage.id)
        .await?;

    assert_eq!(used.len(), 2);
    assert!(used.contains(&5));
    assert!(used.contains(&77));
    assert!(!used.contains(&12));

    Ok(())
}

/// Tests collecting taken numbers of a stage without pilots.
///
/// Expected: Ok with an empty set
#[tokio::test]
async fn empty_for_new_stage() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, stage) = factory::helpers::create_stage_with_dependencies(db).await?;

    let used = ParticipantRepository::new(db)
        .get_used_numbers(stage.id)
        .await?;

    assert!(used.is_empty());

    Ok(())
}
