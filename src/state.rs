//! Application state shared by the presentation layer.
//!
//! `AppState` bundles the long-lived collaborators services are constructed from. It is
//! built once by `startup::bootstrap` and cloned cheaply wherever a handler needs it:
//!
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `Arc<dyn ObjectStore>` is reference counted
//! - `StageLocks` shares its lock table through an `Arc`

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::AppError,
    model::{championship::Championship, stage::Stage},
    service::{
        entity::EntityService,
        referral::ReferralManager,
        registration::{RegistrationService, StageLocks},
        role::RoleResolver,
    },
    storage::{bucket::Buckets, ObjectStore},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Object store holding attached file bytes.
    pub object_store: Arc<dyn ObjectStore>,

    /// Bucket naming for this deployment.
    pub buckets: Buckets,

    /// Registration locks shared by every pilot registration in the process.
    pub stage_locks: StageLocks,

    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `object_store` - Object store adapter
    /// - `config` - Application configuration; also determines bucket naming
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, object_store: Arc<dyn ObjectStore>, config: Config) -> Self {
        Self {
            db,
            object_store,
            buckets: Buckets::new(config.s3_bucket_prefix.clone()),
            stage_locks: StageLocks::new(),
            config: Arc::new(config),
        }
    }

    /// Entity service for championships and their posters and regulations.
    pub fn championships(&self) -> EntityService<'_, Championship> {
        EntityService::new(&self.db, self.object_store.as_ref(), &self.buckets)
    }

    /// Entity service for stages and their maps and schedules.
    pub fn stages(&self) -> EntityService<'_, Stage> {
        EntityService::new(&self.db, self.object_store.as_ref(), &self.buckets)
    }

    /// Registration service drawing numbers from the configured range.
    pub fn registration(&self) -> RegistrationService<'_> {
        RegistrationService::new(
            &self.db,
            self.object_store.as_ref(),
            &self.buckets,
            &self.stage_locks,
            self.config.number_start..=self.config.number_end,
        )
    }

    /// Role resolver with the configured admin allow-list.
    pub fn role_resolver(&self) -> RoleResolver {
        RoleResolver::standard(self.db.clone(), self.config.admin_usernames.clone())
    }

    /// Deep link for an issued invitation code pointing at the configured bot.
    pub fn invite_link(&self, code: &str) -> Result<String, AppError> {
        ReferralManager::link(code, &self.config.bot_username)
    }
}
