use sqlx::sqlite::SqlitePool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use squad_site_api::config::Config;
use squad_site_api::error::StartupError;
use squad_site_api::{db, routes};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting squad site api...");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let pool = SqlitePool::connect(&config.database_url).await?;
    db::migrate(&pool).await?;

    tracing::info!("Database connection established.");

    let cors = routes::cors_layer(&config)?;
    let app = routes::router(pool).layer(cors);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
