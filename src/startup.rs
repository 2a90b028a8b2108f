//! Application startup and lifecycle management.
//!
//! Builds the router, binds the listener, and runs the server until a
//! shutdown signal arrives.

use axum::{
    http::{header, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::error::AppError;
use crate::handlers::app::health_check;
use crate::handlers::locations::{find_location, get_all_locations, preflight};
use crate::middleware::auth::bearer_auth_middleware;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Settings,
}

/// Assemble the full HTTP surface.
///
/// The two location endpoints sit behind the bearer-auth middleware; the
/// health check does not. CORS is applied once at the outer edge so every
/// response, including auth failures, carries the headers.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/get-locations",
            post(get_all_locations).options(preflight),
        )
        .route("/find-location", post(find_location).options(preflight))
        .layer(from_fn_with_state(state, bearer_auth_middleware));

    Router::new()
        .route("/", get(health_check))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::PUT,
                    Method::POST,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Bind the listener for the configured address (port 0 = random port
    /// for testing).
    pub async fn build(config: Settings) -> Result<Self, AppError> {
        let address = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state: AppState { config },
        })
    }

    /// The port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve requests until the process receives a shutdown signal.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state);

        tracing::info!("Location directory listening on port {}", self.port);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
