//! Application startup and lifecycle management.

use crate::config::AppConfig;
use crate::handlers;
use crate::services::providers::{openai::OpenAiProvider, CompletionProvider};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub provider: Arc<dyn CompletionProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: AppConfig) -> std::io::Result<Self> {
        let provider: Arc<dyn CompletionProvider> = Arc::new(OpenAiProvider::new(
            config.openai.api_key.clone(),
            config.openai.model.clone(),
        ));

        tracing::info!(
            model = %config.openai.model,
            "Initialized OpenAI completion provider"
        );

        Self::build_with_provider(config, provider).await
    }

    /// Build the application with an injected provider. Tests use this to
    /// substitute a mock.
    pub async fn build_with_provider(
        config: AppConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> std::io::Result<Self> {
        let state = AppState {
            config: config.clone(),
            provider,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            e
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = Router::new()
            .route("/api/generate", post(handlers::generate::generate))
            .route("/health", get(handlers::health::health_check))
            .route("/ready", get(handlers::health::readiness_check))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state);

        axum::serve(self.listener, router).await
    }
}
