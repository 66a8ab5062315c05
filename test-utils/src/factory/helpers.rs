//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating rows
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a stage together with the championship and organizing user it belongs to.
///
/// All rows are created with default values. The stage is open for registration.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, championship, stage))` - Tuple of all created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_stage_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::championship::Model,
        entity::stage::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::UserFactory::new(db)
        .role("ADMIN")
        .build()
        .await?;
    let championship = crate::factory::championship::create_championship(db, user.id).await?;
    let stage = crate::factory::stage::create_stage(db, championship.id).await?;

    Ok((user, championship, stage))
}
