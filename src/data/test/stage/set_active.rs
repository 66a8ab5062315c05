use super::*;

/// Tests closing registration on a stage.
///
/// Expected: Ok(true) and the flag persisted
#[tokio::test]
async fn closes_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, stage) = factory::helpers::create_stage_with_dependencies(db).await?;

    let repo = StageRepository::new(db);
    let updated = repo.set_active(stage.id, false).await?;

    assert!(updated);
    let stored = repo.find_by_id(stage.id).await?.unwrap();
    assert!(!stored.is_active);

    Ok(())
}
