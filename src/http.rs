//! HTTP transport module for the ai-use-cases MCP server
//!
//! Axum-based server exposing MCP over Streamable HTTP plus plain-JSON
//! health, info, and metrics endpoints. Bearer auth is enforced only when a
//! token is configured.

use crate::config::Config;
use crate::error::Result;
use crate::server::UseCasesServer;
use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::get,
};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager,
    tower::{StreamableHttpServerConfig, StreamableHttpService},
};
use serde_json::json;
use std::{cmp::Ordering, sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

/// Shared state for HTTP server
#[derive(Clone)]
pub struct HttpState {
    pub config: Arc<Config>,
    pub metrics: Arc<Mutex<HttpMetrics>>,
    pub session_mgr: Arc<LocalSessionManager>,
}

/// Metrics for HTTP server
#[derive(Debug, Clone, Default)]
pub struct HttpMetrics {
    pub total_requests: u64,
    pub last_request_unix: u64,
    pub errors_total: u64,
    pub latencies: Vec<f64>, // ring buffer for p95
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// Info endpoint
pub async fn info_handler(State(state): State<HttpState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json!({
            "server": {
                "name": "ai-use-cases-server",
                "transport": state.config.runtime.transport,
                "bind": state.config.runtime.http_bind.to_string(),
                "path": state.config.runtime.http_path,
            },
            "db": {
                "path": state.config.system.database_path,
            },
            "search": {
                "configured": state.config.runtime.google_api_key.is_some()
                    && state.config.runtime.google_cx.is_some(),
            }
        })
        .to_string(),
    )
}

/// Metrics endpoint
pub async fn metrics_handler(State(state): State<HttpState>) -> impl IntoResponse {
    let metrics = state.metrics.lock().await.clone();
    let active_sessions = state.session_mgr.sessions.read().await.len();

    let (avg_latency_ms, p95_latency_ms) = if metrics.latencies.is_empty() {
        (None, None)
    } else {
        let sum: f64 = metrics.latencies.iter().sum();
        let avg = sum / metrics.latencies.len() as f64;
        let mut sorted = metrics.latencies.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let p95_idx = (sorted.len() as f64 * 0.95) as usize;
        let p95 = sorted.get(p95_idx).copied();
        (Some(avg), p95)
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json!({
            "metrics_version": "1",
            "total_requests": metrics.total_requests,
            "last_request_unix": metrics.last_request_unix,
            "http_active_sessions": active_sessions,
            "errors_total": metrics.errors_total,
            "avg_latency_ms": avg_latency_ms,
            "p95_latency_ms": p95_latency_ms
        })
        .to_string(),
    )
}

/// Start the HTTP server
pub async fn start_http_server(server: UseCasesServer) -> Result<()> {
    let session_mgr = Arc::new(LocalSessionManager::default());
    let state = HttpState {
        config: server.config.clone(),
        metrics: Arc::new(Mutex::new(HttpMetrics::default())),
        session_mgr: session_mgr.clone(),
    };

    // Build MCP streamable HTTP service mounted at configured path
    let path = server.config.runtime.http_path.clone();
    let keepalive = Duration::from_secs(server.config.runtime.http_sse_keepalive_sec);
    let server_factory = server.clone();
    let mcp_service: StreamableHttpService<UseCasesServer, _> = StreamableHttpService::new(
        move || Ok(server_factory.clone()),
        session_mgr.clone(),
        StreamableHttpServerConfig {
            stateful_mode: true,
            sse_keep_alive: Some(keepalive),
            ..Default::default()
        },
    );

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .route("/metrics", get(metrics_handler))
        .nest_service(path.as_str(), mcp_service)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .layer(middleware::from_fn_with_state(
            (state.metrics.clone(), path.clone()),
            |State((metrics, base)): State<(Arc<Mutex<HttpMetrics>>, String)>,
             req: axum::http::Request<Body>,
             next: axum::middleware::Next| async move {
                let is_mcp = req.uri().path().starts_with(&base);
                let start = if is_mcp {
                    Some(std::time::Instant::now())
                } else {
                    None
                };
                let resp = next.run(req).await;
                if let Some(start_time) = start {
                    let latency_ms = start_time.elapsed().as_millis() as f64;
                    let mut m = metrics.lock().await;
                    if latency_ms > 0.0 {
                        m.latencies.push(latency_ms);
                        if m.latencies.len() > 256 {
                            m.latencies.remove(0);
                        }
                    }
                    if !resp.status().is_success() {
                        m.errors_total = m.errors_total.saturating_add(1);
                    }
                    m.total_requests = m.total_requests.saturating_add(1);
                    m.last_request_unix = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .unwrap_or_default()
                        .as_secs();
                }
                resp
            },
        ))
        // Bearer auth only when a token is configured; /health stays open
        .layer(middleware::from_fn_with_state(
            server.config.runtime.bearer_token.clone(),
            |State(token): State<Option<String>>,
             req: axum::http::Request<Body>,
             next: axum::middleware::Next| async move {
                let Some(expected) = token else {
                    return next.run(req).await;
                };
                if req.uri().path() == "/health" {
                    return next.run(req).await;
                }
                let headers: &HeaderMap = req.headers();
                let header_ok = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|h| h.to_str().ok())
                    .map(|v| v == format!("Bearer {}", expected))
                    .unwrap_or(false);
                if !header_ok {
                    return (
                        StatusCode::UNAUTHORIZED,
                        [(header::CONTENT_TYPE, "application/json")],
                        serde_json::json!({"error": {"code": 401, "message": "Unauthorized"}})
                            .to_string(),
                    )
                        .into_response();
                }
                next.run(req).await
            },
        ))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(server.config.runtime.http_bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP listener: {}", e))?;

    tracing::info!(
        "Starting HTTP server on {} (MCP at {})",
        server.config.runtime.http_bind,
        server.config.runtime.http_path
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
