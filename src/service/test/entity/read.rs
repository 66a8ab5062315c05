use super::*;

/// Tests reading an entity with its file contents.
///
/// Expected: Ok(Some) with blobs in attachment order carrying the original names
#[tokio::test]
async fn returns_blobs_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = MemoryObjectStore::new();
    let buckets = Buckets::default();

    let admin = factory::create_user(db).await?;
    let championship = factory::create_championship(db, admin.id).await?;

    let service = EntityService::<Stage>::new(db, &store, &buckets);
    let stage = service
        .create(
            stage_param(championship.id),
            vec![
                Blob::new("map.png", b"map".to_vec()),
                Blob::new("schedule.txt", b"schedule".to_vec()),
            ],
        )
        .await?;

    let (read, blobs) = service.read(stage.id).await?.unwrap();

    assert_eq!(read.id, stage.id);
    assert_eq!(
        read.files.iter().map(|f| &f.key).collect::<Vec<_>>(),
        stage.files.iter().map(|f| &f.key).collect::<Vec<_>>()
    );
    assert_eq!(
        blobs,
        vec![
            Blob::new("map.png", b"map".to_vec()),
            Blob::new("schedule.txt", b"schedule".to_vec()),
        ]
    );

    Ok(())
}

/// Tests reading an entity that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = MemoryObjectStore::new();
    let buckets = Buckets::default();

    let result = EntityService::<Stage>::new(db, &store, &buckets)
        .read(404)
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that reading fails when a referenced blob is gone.
///
/// Verifies all-or-nothing hydration: one missing blob fails the whole read while
/// metadata stays available through `get`.
///
/// Expected: Err(Storage(Download)) from read, Ok(Some) from get
#[tokio::test]
async fn fails_when_blob_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = MemoryObjectStore::new();
    let buckets = Buckets::default();

    let admin = factory::create_user(db).await?;
    let championship = factory::create_championship(db, admin.id).await?;

    let service = EntityService::<Stage>::new(db, &store, &buckets);
    let stage = service
        .create(
            stage_param(championship.id),
            vec![Blob::new("a.jpg", vec![1]), Blob::new("b.jpg", vec![2])],
        )
        .await?;
    store.evict(&stage.files[1].key, &stage.files[1].bucket);

    let result = service.read(stage.id).await;

    assert!(matches!(
        result,
        Err(AppError::Storage(StorageError::Download { .. }))
    ));
    assert_eq!(service.get(stage.id).await?.map(|s| s.files.len()), Some(2));

    Ok(())
}
