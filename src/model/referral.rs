//! Invitation code domain model.

use chrono::{DateTime, Utc};

use crate::{error::AppError, model::user::Role, util::parse::parse_stored};

/// A single-use, time-limited invitation granting a role on a stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferralCode {
    pub id: i32,
    /// Stage the code grants access to.
    pub scope_id: i32,
    /// Id of the user who issued the code.
    pub issuer_id: i64,
    pub code: String,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
    /// Set once on redemption, never cleared.
    pub activated: bool,
    pub created_at: DateTime<Utc>,
}

impl ReferralCode {
    /// Converts an entity model to a referral code at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ReferralCode)` - The converted domain model
    /// - `Err(AppError::Internal(UnknownEnumValue))` - Stored role is not recognized
    pub fn from_entity(entity: entity::referral_code::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            scope_id: entity.scope_id,
            issuer_id: entity.issuer_id,
            code: entity.code,
            role: parse_stored("referral_codes.role", entity.role)?,
            expires_at: entity.expires_at,
            activated: entity.activated,
            created_at: entity.created_at,
        })
    }

    /// Whether the code may still be redeemed at `now`.
    ///
    /// The expiry instant itself is still valid.
    pub fn is_redeemable_at(&self, now: DateTime<Utc>) -> bool {
        !self.activated && now <= self.expires_at
    }
}

/// Parameters for persisting a freshly generated code.
#[derive(Debug, Clone)]
pub struct CreateReferralCodeParam {
    pub scope_id: i32,
    pub issuer_id: i64,
    pub code: String,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}
