use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppError;
use crate::startup::AppState;

#[derive(Debug, Serialize)]
pub struct ContractResponse {
    pub contract_text: String,
}

/// POST /generate-contract.
///
/// Any request body is ignored: every invocation sends the one configured
/// instruction payload. Without a configured provider the remote service is
/// never contacted.
#[tracing::instrument(skip(state))]
pub async fn generate_contract(
    State(state): State<AppState>,
) -> Result<Json<ContractResponse>, AppError> {
    let provider = state.text_provider.as_ref().ok_or(AppError::NotConfigured)?;

    match provider.generate(state.prompt.text()).await {
        Ok(completion) => {
            tracing::info!(
                input_tokens = completion.input_tokens,
                output_tokens = completion.output_tokens,
                finish_reason = ?completion.finish_reason,
                "Contract generated"
            );
            Ok(Json(ContractResponse {
                contract_text: completion.text,
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, "Contract generation failed");
            Err(AppError::Generation(e))
        }
    }
}
