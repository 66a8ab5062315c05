use drift_registry::{config::Config, error::AppError, startup};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drift_registry=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = startup::bootstrap(config).await?;

    tracing::info!(
        "Registry ready, pilot numbers {}..={}",
        state.config.number_start,
        state.config.number_end
    );

    Ok(())
}
