mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    router,
    service::auth::token::TokenService,
    startup,
    state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "vedic_learn=debug,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cors = startup::cors_layer(&config)?;
    let tokens = TokenService::new(&config.secret_key, config.token_ttl);

    if config.admin_usernames.is_empty() {
        tracing::warn!("ADMIN_USERNAMES is empty; no account will register as admin");
    }

    let app = router::router()
        .with_state(AppState::new(db, tokens, config.admin_usernames.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(InternalError::from)?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InternalError::from)?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutting down");
}
