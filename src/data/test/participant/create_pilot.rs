use super::*;

/// Tests inserting a pilot with an allocated number.
///
/// Expected: Ok with the number and fields stored
#[tokio::test]
async fn creates_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, stage) = factory::helpers::create_stage_with_dependencies(db).await?;

    let pilot = ParticipantRepository::new(db)
        .create_pilot(pilot_param(user.id, stage.id, 86))
        .await?;

    assert_eq!(pilot.number, 86);
    assert_eq!(pilot.base.stage_id, stage.id);
    assert_eq!(pilot.car, "Toyota AE86");
    assert!(pilot.base.is_active);

    Ok(())
}

/// Tests that a racing number can be taken once per stage.
///
/// Verifies that the unique index rejects a second pilot with the same number on the
/// same stage, while the same number on another stage is accepted.
///
/// Expected: Err with a unique violation on the same stage, Ok on the other stage
#[tokio::test]
async fn rejects_duplicate_number_on_stage() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, championship, stage) =
        factory::helpers::create_stage_with_dependencies(db).await?;
    let other_stage = factory::stage::StageFactory::new(db, championship.id)
        .number(2)
        .build()
        .await?;
    let other_user = factory::create_user(db).await?;

    let repo = ParticipantRepository::new(db);
    repo.create_pilot(pilot_param(user.id, stage.id, 13)).await?;

    let duplicate = repo
        .create_pilot(pilot_param(other_user.id, stage.id, 13))
        .await;
    assert!(duplicate.is_err_and(|err| err.is_unique_violation()));

    let elsewhere = repo
        .create_pilot(pilot_param(other_user.id, other_stage.id, 13))
        .await?;
    assert_eq!(elsewhere.number, 13);

    Ok(())
}
