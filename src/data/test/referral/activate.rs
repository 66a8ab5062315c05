use super::*;

/// Tests activating a valid code.
///
/// Expected: Ok(true) and the stored code marked activated
#[tokio::test]
async fn activates_valid_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issuer = factory::user::create_user(db).await?;
    let code = factory::referral_code::create_referral_code(db, issuer.id, 1).await?;

    let repo = ReferralRepository::new(db);
    let activated = repo.activate(&code.code, Utc::now()).await?;

    assert!(activated);
    assert!(repo.find_by_code(&code.code).await?.unwrap().activated);

    Ok(())
}

/// Tests that a code activates only once.
///
/// Expected: Ok(false) on the second activation
#[tokio::test]
async fn activates_only_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issuer = factory::user::create_user(db).await?;
    let code = factory::referral_code::create_referral_code(db, issuer.id, 1).await?;

    let repo = ReferralRepository::new(db);
    let now = Utc::now();

    assert!(repo.activate(&code.code, now).await?);
    assert!(!repo.activate(&code.code, now).await?);

    Ok(())
}

/// Tests the expiry boundary of the conditional update.
///
/// Verifies that a code is still activatable at exactly its expiry instant and not after.
///
/// Expected: Ok(false) one millisecond late, Ok(true) exactly at expiry
#[tokio::test]
async fn respects_expiry_boundary() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issuer = factory::user::create_user(db).await?;
    let code = factory::referral_code::create_referral_code(db, issuer.id, 1).await?;

    let repo = ReferralRepository::new(db);
    let stored = repo.find_by_code(&code.code).await?.unwrap();

    let late = stored.expires_at + Duration::milliseconds(1);
    assert!(!repo.activate(&code.code, late).await?);
    assert!(repo.activate(&code.code, stored.expires_at).await?);

    Ok(())
}

/// Tests activating a code that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_missing_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activated = ReferralRepository::new(db)
        .activate("judge_missing", Utc::now())
        .await?;

    assert!(!activated);

    Ok(())
}
