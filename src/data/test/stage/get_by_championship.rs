use super::*;

/// Tests listing the stages of a championship.
///
/// Verifies ordering by stage number and that stages of other championships are excluded.
///
/// Expected: Ok with stages numbered 1, 2, 3
#[tokio::test]
async fn orders_by_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let championship = factory::create_championship(db, admin.id).await?;
    let other = factory::create_championship(db, admin.id).await?;
    for number in [3, 1, 2] {
        factory::stage::StageFactory::new(db, championship.id)
            .number(number)
            .build()
            .await?;
    }
    factory::create_stage(db, other.id).await?;

    let repo = StageRepository::new(db);
    let stages = repo.get_by_championship(championship.id).await?;

    assert_eq!(
        stages.iter().map(|s| s.number).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    let ids = repo.get_ids_by_championship(championship.id).await?;
    assert_eq!(ids.len(), 3);

    Ok(())
}
