use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jobboard::server::{
    config::Config,
    error::AppError,
    router,
    service::{auth::AuthService, cache::ResponseCache},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("jobboard=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let auth_service = AuthService::new(&config);
    let response_cache = ResponseCache::new();

    let app = router::router(AppState::new(db, auth_service, response_cache));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server_port)).await?;

    tracing::info!("Server listening on port {}...", config.server_port);

    axum::serve(listener, app).await?;

    Ok(())
}
