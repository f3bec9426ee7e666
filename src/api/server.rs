//! Axum HTTP server for the cupcake API.
//!
//! The server is generic over the record store so the same routes run
//! against Postgres in production and the in-memory store in tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::store::CupcakeStore;

use super::errors::ApiError;
use super::pages::render_home;
use super::request::{parse_id, require_payload, CupcakePayload};
use super::response::{
    CreateResponse, HealthResponse, ListResponse, MessageResponse, SingleResponse,
};

/// API server state
pub struct ApiServer<S: CupcakeStore> {
    store: Arc<S>,
    config: ServerConfig,
}

impl<S: CupcakeStore + 'static> ApiServer<S> {
    pub fn new(store: S, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let cors = build_cors(&self.config);
        let state = Arc::new(self);

        Router::new()
            .route("/", get(home_handler))
            .route("/health", get(health_handler))
            .route("/api/cupcakes", get(list_handler))
            .route("/api/cupcakes", post(create_handler))
            .route("/api/cupcakes/{id}", get(get_handler))
            .route("/api/cupcakes/{id}", patch(update_handler))
            .route("/api/cupcakes/{id}", delete(delete_handler))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Bind and serve until a shutdown signal arrives.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        let router = self.router();
        let listener = TcpListener::bind(addr).await?;
        info!(address = %addr, "cupcakes server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("cupcakes server stopped");
        Ok(())
    }
}

/// Shared state type
type ServerState<S> = Arc<ApiServer<S>>;

/// Configure CORS from config; no listed origins means permissive.
fn build_cors(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins = parse_origins(&config.cors_origins);

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Parse configured origins into header values; an unparsable entry is
/// dropped with a warning so a typo in `cors_origins` shows at startup.
fn parse_origins(configured: &[String]) -> Vec<axum::http::HeaderValue> {
    configured
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = %s, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect()
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl-C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

/// Homepage handler: HTML listing of every record
async fn home_handler<S: CupcakeStore + 'static>(
    State(server): State<ServerState<S>>,
) -> Result<Html<String>, ApiError> {
    let cupcakes = server.store.list_all().await?;
    Ok(Html(render_home(&cupcakes)))
}

/// Liveness handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// List records handler
async fn list_handler<S: CupcakeStore + 'static>(
    State(server): State<ServerState<S>>,
) -> Result<Json<ListResponse>, ApiError> {
    let cupcakes = server.store.list_all().await?;
    Ok(Json(ListResponse::new(cupcakes)))
}

/// Get single record handler
async fn get_handler<S: CupcakeStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
) -> Result<Json<SingleResponse>, ApiError> {
    let id = parse_id(&id)?;
    let cupcake = server.store.get(id).await?;
    Ok(Json(SingleResponse::new(cupcake)))
}

/// Create record handler
async fn create_handler<S: CupcakeStore + 'static>(
    State(server): State<ServerState<S>>,
    body: Result<Json<CupcakePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    let payload = require_payload(body)?;
    let cupcake = server.store.create(payload.into()).await?;
    info!(id = cupcake.id, "cupcake created");
    Ok((StatusCode::CREATED, Json(CreateResponse::new(cupcake))))
}

/// Update record handler: replaces all four data fields
async fn update_handler<S: CupcakeStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
    body: Result<Json<CupcakePayload>, JsonRejection>,
) -> Result<Json<SingleResponse>, ApiError> {
    let id = parse_id(&id)?;
    let payload = require_payload(body)?;
    let cupcake = server.store.update(id, payload.into()).await?;
    Ok(Json(SingleResponse::new(cupcake)))
}

/// Delete record handler
async fn delete_handler<S: CupcakeStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    server.store.delete(id).await?;
    info!(id, "cupcake deleted");
    Ok(Json(MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn create_test_server() -> ApiServer<MemoryStore> {
        ApiServer::new(MemoryStore::new(), ServerConfig::default())
    }

    #[test]
    fn test_server_creation() {
        let server = create_test_server();
        let _router = server.router();
        // Router builds with every route registered
    }

    #[test]
    fn test_unparsable_origin_is_dropped() {
        let configured = vec![
            "http://localhost:3000".to_string(),
            "not an origin\u{7f}".to_string(),
        ];
        let origins = parse_origins(&configured);
        assert_eq!(origins.len(), 1);
        assert_eq!(origins[0], "http://localhost:3000");
    }

    #[test]
    fn test_socket_addr_from_config() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            cors_origins: vec![],
        };
        let server = ApiServer::new(MemoryStore::new(), config);
        assert_eq!(server.socket_addr(), "127.0.0.1:9000");
    }
}
