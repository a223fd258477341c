use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use metascope::ai::OpenAiModel;
use metascope::config::Config;
use metascope::handlers;
use metascope::renderer::HttpRenderer;
use metascope::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing — JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "metascope=info,tower_http=info".parse().unwrap());

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🔎 Metascope starting...");

    // Load configuration — fatal if either API key is missing.
    let config = Config::from_env().expect("Failed to load configuration");
    info!("📝 Configuration loaded");

    // This is a public analysis tool: all origins, methods, and headers.
    let cors = CorsLayer::permissive();
    info!("🔓 CORS: permissive");

    let addr = config.server_addr();

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .expect("Failed to build HTTP client");

    let app_state = AppState {
        http_client,
        renderer: Arc::new(HttpRenderer::new().expect("Failed to build page renderer")),
        model: Arc::new(
            OpenAiModel::new(config.openai_api_key).expect("Failed to build OpenAI client"),
        ),
        pagespeed_api_key: Arc::from(config.pagespeed_api_key),
    };

    // Prometheus metrics layer
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    // Build router
    let app = Router::new()
        // Health check + metrics
        .route("/health", get(handlers::health_check))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        // Analysis routes
        .route("/analyze", get(handlers::analyze::analyze_seo))
        .route("/pagespeed", get(handlers::pagespeed::check_pagespeed))
        // Middleware
        .layer(prometheus_layer)
        .layer(cors)
        .with_state(app_state);

    // Start server
    info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
