#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::KioskConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(api_url = %config.api_url, accept_invalid_certs = config.accept_invalid_certs, "kiosk backend configured");

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "kiosk listening");
    axum::serve(listener, app).await.expect("server failed");
}
