use super::*;

/// Tests persisting a new code.
///
/// Expected: Ok with the code stored unredeemed and findable by value
#[tokio::test]
async fn creates_unredeemed_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issuer = factory::user::create_user(db).await?;
    let expires_at = Utc::now() + Duration::days(3);

    let repo = ReferralRepository::new(db);
    let created = repo
        .create(CreateReferralCodeParam {
            scope_id: 5,
            issuer_id: issuer.id,
            code: "judge_abc".to_string(),
            role: Role::Judge,
            expires_at,
        })
        .await?;

    assert!(!created.activated);
    assert_eq!(created.scope_id, 5);
    assert_eq!(created.role, Role::Judge);

    let found = repo.find_by_code("judge_abc").await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests that code values are unique.
///
/// Expected: Err on the second insert of the same code
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issuer = factory::user::create_user(db).await?;
    let param = CreateReferralCodeParam {
        scope_id: 1,
        issuer_id: issuer.id,
        code: "pilot_same".to_string(),
        role: Role::Pilot,
        expires_at: Utc::now() + Duration::days(3),
    };

    let repo = ReferralRepository::new(db);
    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(result.is_err_and(|err| err.is_unique_violation()));

    Ok(())
}
