use super::*;

/// Tests deleting the files of one owner.
///
/// Verifies that only rows of the given kind and id are removed.
///
/// Expected: Ok(2) with the other owners' rows untouched
#[tokio::test]
async fn deletes_only_owner_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FileRef)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FileRefRepository::new(db);
    repo.create_many(EntityKind::Stage, 1, vec![uploaded("s1", 0), uploaded("s2", 1)])
        .await?;
    repo.create_many(EntityKind::Stage, 2, vec![uploaded("other", 0)])
        .await?;
    repo.create_many(EntityKind::Championship, 1, vec![uploaded("c1", 0)])
        .await?;

    let deleted = repo.delete_by_parent(EntityKind::Stage, 1).await?;

    assert_eq!(deleted, 2);
    assert!(repo.get_by_parent(EntityKind::Stage, 1).await?.is_empty());
    assert_eq!(repo.get_by_parent(EntityKind::Stage, 2).await?.len(), 1);
    assert_eq!(
        repo.get_by_parent(EntityKind::Championship, 1).await?.len(),
        1
    );

    Ok(())
}
