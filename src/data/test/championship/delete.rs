use super::*;

/// Tests deleting a championship with stages and pilots.
///
/// Verifies that the database cascade removes stages and their pilots together with the
/// championship row.
///
/// Expected: Ok(true) and no stage or pilot rows left
#[tokio::test]
async fn cascades_to_stages_and_pilots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, championship, stage) = factory::helpers::create_stage_with_dependencies(db).await?;
    factory::create_pilot(db, admin.id, stage.id, 7).await?;

    let deleted = ChampionshipRepository::new(db)
        .delete(championship.id)
        .await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Stage::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Pilot::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a championship that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Championship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ChampionshipRepository::new(db).delete(404).await?;

    assert!(!deleted);

    Ok(())
}
