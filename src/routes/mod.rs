use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::config::{Config, ConfigError};
use crate::error::ApiError;

pub mod health;
pub mod players;
pub mod submissions;
pub mod teams;

pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        // Root and health
        .route("/", get(|| async { "Squad Site API - v1.0" }))
        .route("/health", get(health::health_check))

        // Team endpoints
        .route("/api/teams", get(teams::get_teams))
        .route("/api/teams/{team}/players", get(players::get_squad))

        // Player endpoints
        .route("/api/players", get(players::get_players))

        // Contact form
        .route("/api/submissions", post(submissions::create_submission))

        .fallback(|| async { ApiError::NotFound })
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

/// CORS for the site frontend: the configured origin, or any.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let origin = match &config.cors_origin {
        Some(origin) => {
            let value = HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                name: "CORS_ORIGIN",
                value: origin.clone(),
            })?;
            AllowOrigin::exact(value)
        }
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
