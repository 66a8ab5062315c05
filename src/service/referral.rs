//! Invitation code lifecycle.
//!
//! A code is issued for a stage and a role, travels to the invitee as a chat deep link
//! and is redeemed exactly once before it expires. Redeemed and expired codes are kept
//! for audit.

use chrono::{DateTime, Duration, Utc};
use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;
use url::Url;

use crate::{
    data::referral::ReferralRepository,
    error::{referral::ReferralError, AppError},
    model::{
        referral::{CreateReferralCodeParam, ReferralCode},
        user::Role,
    },
};

/// How long an issued code stays redeemable.
pub const CODE_TTL_DAYS: i64 = 3;

/// Length of the random part of a code.
const CODE_RANDOM_LEN: usize = 32;

const DEEP_LINK_BASE: &str = "https://t.me/";
const START_COMMAND: &str = "/start";

/// Service issuing and redeeming invitation codes.
pub struct ReferralManager<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferralManager<'a> {
    /// Creates a new ReferralManager instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a new code granting `role` on stage `scope_id`.
    ///
    /// The code is the lower-case role name, an underscore and 32 random alphanumerics,
    /// e.g. `judge_q3...`. It expires three days after issuing.
    ///
    /// # Arguments
    /// - `scope_id` - Stage the invitee is bound to on redemption
    /// - `issuer_id` - User issuing the code
    /// - `role` - Role granted on redemption
    ///
    /// # Returns
    /// - `Ok(ReferralCode)` - Stored, unredeemed code
    /// - `Err(AppError::Persistence)` - Database error, e.g. the issuer does not exist
    pub async fn invite(
        &self,
        scope_id: i32,
        issuer_id: i64,
        role: Role,
    ) -> Result<ReferralCode, AppError> {
        let code = generate_code(role);
        let expires_at = Utc::now() + Duration::days(CODE_TTL_DAYS);

        let referral = ReferralRepository::new(self.db)
            .create(CreateReferralCodeParam {
                scope_id,
                issuer_id,
                code,
                role,
                expires_at,
            })
            .await?;

        tracing::info!(
            "User {} issued {} invitation for stage {}",
            issuer_id,
            role,
            scope_id
        );

        Ok(referral)
    }

    /// Redeems a code at the current time.
    ///
    /// See `redeem_at`.
    pub async fn redeem(&self, code: &str) -> Result<ReferralCode, AppError> {
        self.redeem_at(code, Utc::now()).await
    }

    /// Redeems a code as of `now`.
    ///
    /// An activated code is rejected regardless of the clock. An expired code is rejected
    /// without being modified. Otherwise the code is activated by a single conditional
    /// update; if that update loses a race the code is read again to report why.
    ///
    /// # Arguments
    /// - `code` - Code as received from the invitee
    /// - `now` - Instant of redemption; redeeming exactly at `expires_at` succeeds
    ///
    /// # Returns
    /// - `Ok(ReferralCode)` - Code after activation
    /// - `Err(AppError::Referral(NotFound))` - No such code
    /// - `Err(AppError::Referral(AlreadyActivated))` - Code was redeemed before
    /// - `Err(AppError::Referral(Expired))` - `now` is after `expires_at`
    /// - `Err(AppError::Persistence)` - Database error
    pub async fn redeem_at(&self, code: &str, now: DateTime<Utc>) -> Result<ReferralCode, AppError> {
        let repo = ReferralRepository::new(self.db);

        let referral = repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| ReferralError::NotFound(code.to_string()))?;

        if referral.activated {
            return Err(ReferralError::AlreadyActivated(code.to_string()).into());
        }
        if now > referral.expires_at {
            return Err(ReferralError::Expired(code.to_string()).into());
        }

        let activated = repo.activate(code, now).await?;
        let current = repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| ReferralError::NotFound(code.to_string()))?;

        if !activated {
            let err = if current.activated {
                ReferralError::AlreadyActivated(code.to_string())
            } else {
                ReferralError::Expired(code.to_string())
            };
            return Err(err.into());
        }

        tracing::info!(
            "Invitation {} redeemed for {} on stage {}",
            current.id,
            current.role,
            current.scope_id
        );

        Ok(current)
    }

    /// Lists every code issued for a stage, newest first.
    pub async fn list_by_scope(&self, scope_id: i32) -> Result<Vec<ReferralCode>, AppError> {
        ReferralRepository::new(self.db).get_by_scope(scope_id).await
    }

    /// Builds the chat deep link carrying `code` as the start parameter.
    ///
    /// # Arguments
    /// - `code` - Issued code
    /// - `bot_username` - Handle of the bot the link opens
    ///
    /// # Returns
    /// - `Ok(String)` - Link of the form `https://t.me/{bot}?start={code}`
    /// - `Err(AppError::InternalError)` - Bot handle does not form a valid URL
    pub fn link(code: &str, bot_username: &str) -> Result<String, AppError> {
        let base = format!("{}{}", DEEP_LINK_BASE, bot_username.trim_start_matches('@'));
        let url = Url::parse_with_params(&base, &[("start", code)])
            .map_err(|e| AppError::InternalError(format!("Invalid deep link '{}': {}", base, e)))?;

        Ok(url.to_string())
    }

    /// Extracts a code from a raw start payload.
    ///
    /// Accepts either a deep link URL with a `start` query parameter or the
    /// `/start <code>` command text the chat client sends when such a link is opened.
    ///
    /// # Returns
    /// - `Some(String)` - Extracted code
    /// - `None` - Payload carries no code
    pub fn parse_code(payload: &str) -> Option<String> {
        let payload = payload.trim();

        if let Some(rest) = payload.strip_prefix(START_COMMAND) {
            return rest
                .split_whitespace()
                .next()
                .map(str::to_string);
        }

        let url = Url::parse(payload).ok()?;
        url.query_pairs()
            .find(|(name, _)| name == "start")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    }
}

fn generate_code(role: Role) -> String {
    let random: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(CODE_RANDOM_LEN)
        .map(char::from)
        .collect();

    format!("{}_{}", role.code_prefix(), random)
}
