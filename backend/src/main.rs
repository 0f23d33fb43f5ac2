use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod handlers {
    pub mod contact_handlers;
}
mod models {
    pub mod contact_models;
}
mod config {
    pub mod site_config;
}
mod utils {
    pub mod mail_utils;
}

use config::site_config::SiteConfig;
use handlers::contact_handlers;
use utils::mail_utils::{self, Mailer};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    config: SiteConfig,
    mailer: Arc<dyn Mailer>,
}

pub fn app(state: Arc<AppState>) -> Router {
    // unknown paths get index.html so client routes like /thank-you load directly
    let root = &state.config.site_root;
    let site = ServeDir::new(root).fallback(ServeFile::new(root.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact_json))
        .route("/contact", post(contact_handlers::submit_contact_form))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // the wasm dev server runs on another port
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let config = SiteConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let mailer = mail_utils::mailer_from_config(&config)?;
    tracing::info!(
        "Relaying contact form to {} via {}, serving {}",
        config.recipient,
        config.transport,
        config.site_root.display()
    );

    let bind_address = config.bind_address;
    let state = Arc::new(AppState { config, mailer });

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!("Listening on {}", bind_address);
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
