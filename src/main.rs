use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use leadline::config::AppConfig;
use leadline::handlers;
use leadline::services::dispatch::Dispatcher;
use leadline::services::messaging::twilio::TwilioWhatsAppProvider;
use leadline::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let missing = config.provider.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(
            missing = %missing.join(", "),
            "messaging provider is not configured; every send will fail until these are set"
        );
    }

    let messaging = TwilioWhatsAppProvider::new(
        config.provider.account_sid.clone(),
        config.provider.auth_token.clone(),
        config.provider.api_base.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        dispatcher: Dispatcher::new(config.provider.clone(), Box::new(messaging)),
    });

    let app = Router::new()
        .route("/", get(handlers::page::index_page))
        .route("/health", get(handlers::health::health))
        .route(
            "/api/send-message",
            post(handlers::send_message::send_message),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
