use super::*;

/// Tests championship pagination.
///
/// Verifies that pages are ordered newest first and that the total counts every
/// championship regardless of the page.
///
/// Expected: Ok with 2 + 1 championships across two pages, total 3
#[tokio::test]
async fn paginates_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Championship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .role("ADMIN")
        .build()
        .await?;
    let first = factory::create_championship(db, admin.id).await?;
    let second = factory::create_championship(db, admin.id).await?;
    let third = factory::create_championship(db, admin.id).await?;

    let repo = ChampionshipRepository::new(db);
    let (page_0, total) = repo.get_paginated(0, 2).await?;
    let (page_1, _) = repo.get_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        page_0.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![third.id, second.id]
    );
    assert_eq!(page_1.iter().map(|c| c.id).collect::<Vec<_>>(), vec![first.id]);

    Ok(())
}

/// Tests pagination of an empty table.
///
/// Expected: Ok with no championships and total 0
#[tokio::test]
async fn returns_empty_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Championship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (championships, total) = ChampionshipRepository::new(db)
        .get_paginated(0, 10)
        .await?;

    assert!(championships.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
