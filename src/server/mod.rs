//! JSON HTTP surface around the recommendation engine.

pub mod dto;
pub mod error;
pub mod handlers;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::gpu::GpuClassifier;
use crate::core::processor::ProcessorClassifier;
use crate::core::{ConfigProvider, RecommendationEngine};
use crate::utils::error::{Result, TierError};

pub type Engine = RecommendationEngine<ProcessorClassifier, GpuClassifier>;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: Arc::new(Engine::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// 空清單時允許任何來源，對應 `Access-Control-Allow-Origin: *`
fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let allowed: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn create_router<C: ConfigProvider>(state: AppState, config: &C) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/recommend", post(handlers::recommend))
        .with_state(state)
        .layer(build_cors_layer(config.allowed_origins()))
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server<C: ConfigProvider>(config: &C) -> Result<()> {
    let app = create_router(AppState::new(), config);

    let addr = format!("{}:{}", config.host(), config.port());
    let listener = TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    if config.allowed_origins().is_empty() {
        tracing::info!("🌐 CORS: allowing any origin");
    } else {
        tracing::info!("🌐 CORS: allowing {}", config.allowed_origins().join(", "));
    }
    tracing::info!("🚀 Server started on http://{}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TierError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
