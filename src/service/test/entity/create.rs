use super::*;

/// Tests creating a stage with one photo.
///
/// Verifies that the blob lands in the stage bucket under a generated key with the
/// lower-cased extension, and that the stored reference describes it.
///
/// Expected: Ok with one Photo reference at position 0
#[tokio::test]
async fn creates_stage_with_photo() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = MemoryObjectStore::new();
    let buckets = Buckets::default();

    let admin = factory::create_user(db).await?;
    let championship = factory::create_championship(db, admin.id).await?;

    let stage = EntityService::<Stage>::new(db, &store, &buckets)
        .create(
            stage_param(championship.id),
            vec![Blob::new("Track.JPG", b"\xff\xd8\xff".to_vec())],
        )
        .await?;

    assert_eq!(stage.files.len(), 1);
    let file = &stage.files[0];
    assert_eq!(file.kind, FileKind::Photo);
    assert_eq!(file.format, "jpg");
    assert_eq!(file.name, "Track.JPG");
    assert_eq!(file.size, 3);
    assert_eq!(file.position, 0);
    assert_eq!(file.bucket, "stages");
    assert!(file.key.ends_with(".jpg"));
    assert!(store.contains(&file.key, "stages"));

    Ok(())
}

/// Tests creating an entity with several files of mixed kinds.
///
/// Expected: Ok with positions 0..3 in the order given and kinds inferred per file
#[tokio::test]
async fn keeps_attachment_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = MemoryObjectStore::new();
    let buckets = Buckets::new("dev");

    let admin = factory::create_user(db).await?;

    let championship = EntityService::<Championship>::new(db, &store, &buckets)
        .create(
            CreateChampionshipParam {
                user_id: admin.id,
                title: "Summer Series".to_string(),
                description: None,
                stages_count: 4,
            },
            vec![
                Blob::new("poster.png", vec![1]),
                Blob::new("regulations.pdf", vec![2, 2]),
                Blob::new("podium.jpeg", vec![3, 3, 3]),
            ],
        )
        .await?;

    assert_eq!(
        championship
            .files
            .iter()
            .map(|f| (f.position, f.kind))
            .collect::<Vec<_>>(),
        vec![
            (0, FileKind::Photo),
            (1, FileKind::Document),
            (2, FileKind::Photo)
        ]
    );
    assert!(championship
        .files
        .iter()
        .all(|f| f.bucket == "dev-championships"));
    assert_eq!(store.object_count("dev-championships"), 3);

    Ok(())
}

/// Tests that file validation happens before any upload.
///
/// Verifies that a batch with one unsupported file uploads nothing, even though the
/// first file is valid.
///
/// Expected: Err(UnsupportedFormat) with no blobs and no rows
#[tokio::test]
async fn rejects_unsupported_format_before_upload() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = MemoryObjectStore::new();
    let buckets = Buckets::default();

    let admin = factory::create_user(db).await?;
    let championship = factory::create_championship(db, admin.id).await?;

    let result = EntityService::<Stage>::new(db, &store, &buckets)
        .create(
            stage_param(championship.id),
            vec![
                Blob::new("track.jpg", vec![1]),
                Blob::new("setup.exe", vec![2]),
            ],
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::UnsupportedFormat { ref format, .. }))
            if format == "exe"
    ));
    assert_eq!(store.object_count("stages"), 0);
    assert_eq!(entity::prelude::Stage::find().count(db).await?, 0);

    Ok(())
}

/// Tests rejecting a file without extension.
///
/// Expected: Err(MissingExtension) with nothing uploaded
#[tokio::test]
async fn rejects_missing_extension() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = MemoryObjectStore::new();
    let buckets = Buckets::default();

    let admin = factory::create_user(db).await?;
    let championship = factory::create_championship(db, admin.id).await?;

    let result = EntityService::<Stage>::new(db, &store, &buckets)
        .create(stage_param(championship.id), vec![Blob::new("README", vec![1])])
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::MissingExtension(_)))
    ));
    assert_eq!(store.object_count("stages"), 0);

    Ok(())
}

/// Tests that an upload failure writes no rows.
///
/// Verifies that when the second of two uploads fails, neither the entity row nor any
/// file reference is written. The first blob stays behind as an orphan.
///
/// Expected: Err(Storage(Upload)), zero stage and file_ref rows, one orphaned blob
#[tokio::test]
async fn upload_failure_writes_no_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = MemoryObjectStore::new();
    let buckets = Buckets::default();

    let admin = factory::create_user(db).await?;
    let championship = factory::create_championship(db, admin.id).await?;
    store.fail_uploads_after(1);

    let result = EntityService::<Stage>::new(db, &store, &buckets)
        .create(
            stage_param(championship.id),
            vec![Blob::new("a.jpg", vec![1]), Blob::new("b.jpg", vec![2])],
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::Storage(StorageError::Upload { .. }))
    ));
    assert_eq!(entity::prelude::Stage::find().count(db).await?, 0);
    assert_eq!(entity::prelude::FileRef::find().count(db).await?, 0);
    assert_eq!(store.object_count("stages"), 1);

    Ok(())
}

/// Tests that a failed transaction rolls back the entity row.
///
/// The schema is built without the file_refs table so that inserting the references
/// fails after the stage row was inserted in the same transaction.
///
/// Expected: Err(Persistence), zero stage rows, the uploaded blob left as an orphan
#[tokio::test]
async fn persistence_failure_rolls_back_entity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Championship)
        .with_table(entity::prelude::Stage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let store = MemoryObjectStore::new();
    let buckets = Buckets::default();

    let admin = factory::create_user(db).await?;
    let championship = factory::create_championship(db, admin.id).await?;

    let result = EntityService::<Stage>::new(db, &store, &buckets)
        .create(stage_param(championship.id), vec![Blob::new("a.png", vec![1])])
        .await;

    assert!(matches!(result, Err(AppError::Persistence(_))));
    assert_eq!(entity::prelude::Stage::find().count(db).await?, 0);
    assert_eq!(store.object_count("stages"), 1);

    Ok(())
}

/// Tests creating a pilot with a registration photo.
///
/// Expected: Ok with the photo stored in the pilots bucket
#[tokio::test]
async fn creates_pilot_with_photo() -> Result<(), AppError> {
    let test = TestBuilder::new().with_registry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = MemoryObjectStore::new();
    let buckets = Buckets::default();

    let (user, _, stage) = factory::helpers::create_stage_with_dependencies(db).await?;

    let pilot = EntityService::<Pilot>::new(db, &store, &buckets)
        .create(
            CreatePilotParam {
                user_id: user.id,
                stage_id: stage.id,
                full_name: "Nobushige Kumakubo".to_string(),
                age: 41,
                description: String::new(),
                car: "Subaru Impreza".to_string(),
                number: 11,
            },
            vec![Blob::new("car.webp", vec![9; 16])],
        )
        .await?;

    assert_eq!(pilot.number, 11);
    assert_eq!(pilot.base.files.len(), 1);
    assert_eq!(pilot.base.files[0].size, 16);
    assert_eq!(store.object_count("pilots"), 1);

    Ok(())
}
