//! Role resolution on first contact.
//!
//! When a user opens the bot, an ordered list of strategies decides which role they get.
//! The first strategy that produces a role wins; a strategy that fails stops resolution
//! and its error is returned to the caller instead of falling through to a weaker role.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{referral::ReferralError, AppError},
    model::user::{CreateUserParam, Role, User},
    service::referral::ReferralManager,
};

/// What is known about a user when they start a conversation.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    pub user_id: i64,
    pub username: Option<String>,
    /// Raw start payload, e.g. `/start judge_...` or a deep link.
    pub payload: Option<String>,
}

/// Role chosen by a strategy, with the stage an invitation bound the user to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRole {
    pub role: Role,
    pub scope_id: Option<i32>,
}

/// Outcome of resolution: the stored user and the stage an invitation bound them to.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub user: User,
    pub scope_id: Option<i32>,
}

/// One step of role resolution.
#[async_trait]
pub trait ResolveStrategy: Send + Sync {
    /// Attempts to determine a role.
    ///
    /// # Returns
    /// - `Ok(Some(ResolvedRole))` - This strategy decided the role
    /// - `Ok(None)` - Not applicable, the next strategy is tried
    /// - `Err(AppError)` - Resolution must stop with this error
    async fn attempt(&self, ctx: &ResolutionContext) -> Result<Option<ResolvedRole>, AppError>;
}

/// Grants the admin role to usernames on a configured allow-list.
pub struct AdminStrategy {
    admin_usernames: Vec<String>,
}

impl AdminStrategy {
    pub fn new(admin_usernames: Vec<String>) -> Self {
        Self { admin_usernames }
    }
}

#[async_trait]
impl ResolveStrategy for AdminStrategy {
    async fn attempt(&self, ctx: &ResolutionContext) -> Result<Option<ResolvedRole>, AppError> {
        let is_admin = ctx
            .username
            .as_deref()
            .is_some_and(|username| self.admin_usernames.iter().any(|admin| admin == username));

        Ok(is_admin.then_some(ResolvedRole {
            role: Role::Admin,
            scope_id: None,
        }))
    }
}

/// Grants the role encoded in a redeemed invitation code.
///
/// Payloads that are not a known code are left to the next strategy; expired or used
/// codes stop resolution.
pub struct ReferralStrategy {
    db: DatabaseConnection,
}

impl ReferralStrategy {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResolveStrategy for ReferralStrategy {
    async fn attempt(&self, ctx: &ResolutionContext) -> Result<Option<ResolvedRole>, AppError> {
        let Some(code) = ctx.payload.as_deref().and_then(ReferralManager::parse_code) else {
            return Ok(None);
        };

        let referral = match ReferralManager::new(&self.db).redeem(&code).await {
            Ok(referral) => referral,
            Err(AppError::Referral(ReferralError::NotFound(_))) => {
                tracing::debug!("Start payload '{}' is not an invitation code", code);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        let role = Role::from_code_prefix(&referral.code).unwrap_or(referral.role);

        Ok(Some(ResolvedRole {
            role,
            scope_id: Some(referral.scope_id),
        }))
    }
}

/// Grants the pilot role to everyone.
pub struct DefaultStrategy;

#[async_trait]
impl ResolveStrategy for DefaultStrategy {
    async fn attempt(&self, _ctx: &ResolutionContext) -> Result<Option<ResolvedRole>, AppError> {
        Ok(Some(ResolvedRole {
            role: Role::Pilot,
            scope_id: None,
        }))
    }
}

/// Runs resolution strategies in order and stores the resulting user.
pub struct RoleResolver {
    db: DatabaseConnection,
    strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl RoleResolver {
    /// Creates a resolver running `strategies` in the given order.
    pub fn new(db: DatabaseConnection, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
        Self { db, strategies }
    }

    /// Creates the standard chain: admin allow-list, invitation code, pilot default.
    ///
    /// # Arguments
    /// - `db` - Database connection, shared by the referral strategy
    /// - `admin_usernames` - Usernames granted the admin role
    pub fn standard(db: DatabaseConnection, admin_usernames: Vec<String>) -> Self {
        let strategies: Vec<Box<dyn ResolveStrategy>> = vec![
            Box::new(AdminStrategy::new(admin_usernames)),
            Box::new(ReferralStrategy::new(db.clone())),
            Box::new(DefaultStrategy),
        ];

        Self::new(db, strategies)
    }

    /// Resolves the role of a user and stores them if they are new.
    ///
    /// A user that already exists keeps their stored role; the resolved role only applies
    /// to new users. The invitation scope is reported either way.
    ///
    /// # Arguments
    /// - `ctx` - Identity and start payload of the user
    ///
    /// # Returns
    /// - `Ok(Resolution)` - Stored user and optional invitation scope
    /// - `Err(AppError::Referral)` - Payload carried an expired or already used code
    /// - `Err(AppError::InternalError)` - No strategy produced a role
    /// - `Err(AppError::Persistence)` - Database error
    pub async fn resolve(&self, ctx: &ResolutionContext) -> Result<Resolution, AppError> {
        for strategy in &self.strategies {
            let Some(resolved) = strategy.attempt(ctx).await? else {
                continue;
            };

            let user = UserRepository::new(&self.db)
                .get_or_create(CreateUserParam {
                    id: ctx.user_id,
                    username: ctx.username.clone(),
                    role: resolved.role,
                })
                .await?;

            tracing::debug!("Resolved user {} as {}", user.id, user.role);

            return Ok(Resolution {
                user,
                scope_id: resolved.scope_id,
            });
        }

        Err(AppError::InternalError(format!(
            "No strategy resolved a role for user {}",
            ctx.user_id
        )))
    }
}
