use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    state::AppState,
    storage::{bucket::Buckets, s3::S3ObjectStore, ObjectStore},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations to ensure the schema is up-to-date. This function
/// must complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::Persistence)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates every bucket the application writes to.
///
/// Existing buckets are left as they are, so this is safe to run on every start.
///
/// # Arguments
/// - `store` - Object store to provision
/// - `buckets` - Bucket naming for the deployment
///
/// # Returns
/// - `Ok(())` - All buckets exist
/// - `Err(AppError::Storage(Bucket))` - A bucket could not be created
pub async fn provision_buckets(store: &dyn ObjectStore, buckets: &Buckets) -> Result<(), AppError> {
    for bucket in buckets.all() {
        store.create_bucket(&bucket).await?;
    }

    Ok(())
}

/// Connects to both stores and assembles the application state.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(AppState)` - Database migrated, buckets provisioned
/// - `Err(AppError)` - Either store is unreachable or rejected provisioning
pub async fn bootstrap(config: Config) -> Result<AppState, AppError> {
    let db = connect_to_database(&config).await?;
    tracing::info!("Database connected and migrated");

    let object_store: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(&config).await);
    let state = AppState::new(db, object_store, config);

    provision_buckets(state.object_store.as_ref(), &state.buckets).await?;
    tracing::info!("Buckets provisioned: {}", state.buckets.all().join(", "));

    Ok(state)
}
