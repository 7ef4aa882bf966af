use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use food_delivery_hr::{
    app, config::Config, state::AppState, validation::status::AttendanceValidator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_delivery_hr=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        cors_max_age_hours = config.cors_max_age_hours,
        "Loaded configuration from environment/.env"
    );

    let addr = config.bind_addr();
    let state = AppState::new(config, AttendanceValidator::standard());
    let app = app(state);

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
