//! Referral code repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::referral::{CreateReferralCodeParam, ReferralCode},
};

/// Repository providing database operations for invitation codes.
///
/// Codes are never deleted so that redeemed and expired codes remain auditable.
pub struct ReferralRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReferralRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists a freshly generated, unredeemed code.
    ///
    /// # Returns
    /// - `Ok(ReferralCode)` - The stored code
    /// - `Err(AppError::Persistence)` - Database error, e.g. the issuer does not exist
    pub async fn create(&self, param: CreateReferralCodeParam) -> Result<ReferralCode, AppError> {
        let entity = entity::referral_code::ActiveModel {
            scope_id: ActiveValue::Set(param.scope_id),
            issuer_id: ActiveValue::Set(param.issuer_id),
            code: ActiveValue::Set(param.code),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            expires_at: ActiveValue::Set(param.expires_at),
            activated: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ReferralCode::from_entity(entity)
    }

    /// Finds a code by its value.
    ///
    /// # Returns
    /// - `Ok(Some(ReferralCode))` - Code exists
    /// - `Ok(None)` - No such code
    /// - `Err(AppError)` - Database error or unreadable stored role
    pub async fn find_by_code(&self, code: &str) -> Result<Option<ReferralCode>, AppError> {
        entity::prelude::ReferralCode::find()
            .filter(entity::referral_code::Column::Code.eq(code))
            .one(self.db)
            .await?
            .map(ReferralCode::from_entity)
            .transpose()
    }

    /// Marks a code as activated if it is still redeemable at `now`.
    ///
    /// Runs as a single conditional update so that of two concurrent redemptions exactly
    /// one affects the row.
    ///
    /// # Arguments
    /// - `code` - Code to activate
    /// - `now` - Instant of redemption; a code expiring exactly at `now` is still valid
    ///
    /// # Returns
    /// - `Ok(true)` - This call activated the code
    /// - `Ok(false)` - Code is missing, already activated or expired
    /// - `Err(AppError::Persistence)` - Database error during update
    pub async fn activate(&self, code: &str, now: DateTime<Utc>) -> Result<bool, AppError> {
        let result = entity::prelude::ReferralCode::update_many()
            .col_expr(
                entity::referral_code::Column::Activated,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::referral_code::Column::Code.eq(code))
            .filter(entity::referral_code::Column::Activated.eq(false))
            .filter(entity::referral_code::Column::ExpiresAt.gte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets every code issued for a stage, newest first.
    pub async fn get_by_scope(&self, scope_id: i32) -> Result<Vec<ReferralCode>, AppError> {
        entity::prelude::ReferralCode::find()
            .filter(entity::referral_code::Column::ScopeId.eq(scope_id))
            .order_by_desc(entity::referral_code::Column::CreatedAt)
            .order_by_desc(entity::referral_code::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ReferralCode::from_entity)
            .collect()
    }
}
