use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ContractConfig;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::{propagate_request_id, REQUEST_ID_HEADER};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use crate::services::ContractPrompt;

/// Shared application state, cloned per request. Every field is a cheap
/// read-only handle; requests never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    pub config: ContractConfig,
    pub prompt: ContractPrompt,
    /// None while the server runs unconfigured (no credential at startup).
    /// The generation route then answers with a fixed 500 without contacting
    /// the remote service.
    pub text_provider: Option<Arc<dyn TextProvider>>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/generate-contract", post(handlers::generate_contract))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(propagate_request_id))
        .with_state(state)
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application from configuration, constructing the Gemini
    /// provider when a credential is present. A missing or unusable
    /// credential leaves the server running with generation disabled; only a
    /// restart with a valid key recovers it.
    pub async fn build(config: ContractConfig) -> Result<Self, AppError> {
        let text_provider: Option<Arc<dyn TextProvider>> = match &config.google.api_key {
            Some(api_key) => {
                let gemini_config = GeminiConfig {
                    api_key: api_key.clone(),
                    model: config.model.text_model.clone(),
                };
                match GeminiTextProvider::new(gemini_config) {
                    Ok(provider) => {
                        tracing::info!(
                            model = %config.model.text_model,
                            "Initialized Gemini text provider"
                        );
                        Some(Arc::new(provider))
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to construct Gemini client: {}. Contract generation is disabled.",
                            e
                        );
                        None
                    }
                }
            }
            None => {
                tracing::error!(
                    "GOOGLE_API_KEY is not set. Contract generation is disabled until restart."
                );
                None
            }
        };

        Self::with_provider(config, text_provider).await
    }

    /// Build the application around an explicit provider handle (or none).
    /// Tests use this seam to substitute a recording mock.
    pub async fn with_provider(
        config: ContractConfig,
        text_provider: Option<Arc<dyn TextProvider>>,
    ) -> Result<Self, AppError> {
        let prompt = ContractPrompt::load(config.prompt.path.as_deref())?;

        let state = AppState {
            config: config.clone(),
            prompt,
            text_provider,
        };

        let app = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
