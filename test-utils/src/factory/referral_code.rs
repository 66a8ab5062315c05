//! Referral code factory for arranging codes in arbitrary lifecycle states.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating referral codes, including already expired or activated ones.
///
/// # Example
///
/// ```rust,ignore
/// let expired = ReferralCodeFactory::new(&db, admin.id, stage.id)
///     .expires_at(Utc::now() - Duration::hours(1))
///     .build()
///     .await?;
/// ```
pub struct ReferralCodeFactory<'a> {
    db: &'a DatabaseConnection,
    issuer_id: i64,
    scope_id: i32,
    code: String,
    role: String,
    expires_at: DateTime<Utc>,
    activated: bool,
}

impl<'a> ReferralCodeFactory<'a> {
    /// Creates a new ReferralCodeFactory with default values.
    ///
    /// Defaults:
    /// - code: `"judge_factory{id}"`
    /// - role: `"JUDGE"`
    /// - expires_at: three days from now
    /// - activated: `false`
    pub fn new(db: &'a DatabaseConnection, issuer_id: i64, scope_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            issuer_id,
            scope_id,
            code: format!("judge_factory{}", id),
            role: "JUDGE".to_string(),
            expires_at: Utc::now() + Duration::days(3),
            activated: false,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn activated(mut self, activated: bool) -> Self {
        self.activated = activated;
        self
    }

    /// Builds and inserts the referral code row into the database.
    pub async fn build(self) -> Result<entity::referral_code::Model, DbErr> {
        entity::referral_code::ActiveModel {
            scope_id: ActiveValue::Set(self.scope_id),
            issuer_id: ActiveValue::Set(self.issuer_id),
            code: ActiveValue::Set(self.code),
            role: ActiveValue::Set(self.role),
            expires_at: ActiveValue::Set(self.expires_at),
            activated: ActiveValue::Set(self.activated),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unredeemed judge code valid for three days.
pub async fn create_referral_code(
    db: &DatabaseConnection,
    issuer_id: i64,
    scope_id: i32,
) -> Result<entity::referral_code::Model, DbErr> {
    ReferralCodeFactory::new(db, issuer_id, scope_id).build().await
}
