use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::providers::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("server is not configured with an API key")]
    NotConfigured,

    #[error("contract generation failed: {0}")]
    Generation(#[from] ProviderError),

    #[error("configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        // Callers only ever see these fixed messages; failure detail stays in
        // the server log.
        let (status, error_message) = match self {
            AppError::NotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server is not configured with an API key.".to_string(),
            ),
            AppError::Generation(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate contract due to an internal error.".to_string(),
            ),
            AppError::ConfigError(_) | AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&bytes).expect("Body was not valid JSON")
    }

    #[tokio::test]
    async fn test_not_configured_maps_to_fixed_message() {
        let response = AppError::NotConfigured.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Server is not configured with an API key."})
        );
    }

    #[tokio::test]
    async fn test_generation_error_never_leaks_detail() {
        let inner = ProviderError::ApiError("secret upstream detail".to_string());
        let response = AppError::Generation(inner).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({"error": "Failed to generate contract due to an internal error."})
        );
        assert!(!body.to_string().contains("secret upstream detail"));
    }
}
