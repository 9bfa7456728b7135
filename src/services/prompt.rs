//! The contract instruction payload.
//!
//! The prompt sent to the model is fixed for the process lifetime: either the
//! embedded default below or, when a path is configured, a file read once at
//! startup. Request handling never constructs or varies it.

use std::fs;
use std::sync::Arc;

use crate::error::AppError;

/// Instruction payload shipped with the binary.
const DEFAULT_PROMPT: &str = include_str!("../../prompts/freelance_nda.txt");

/// Immutable instruction payload handed to the text provider on every request.
#[derive(Debug, Clone)]
pub struct ContractPrompt {
    text: Arc<str>,
}

impl ContractPrompt {
    /// Read the payload from `path` when given, otherwise use the embedded
    /// default. A configured path that cannot be read is a startup error.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let text = match path {
            Some(p) => fs::read_to_string(p).map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "failed to read contract prompt from {}: {}",
                    p,
                    e
                ))
            })?,
            None => DEFAULT_PROMPT.to_string(),
        };

        Ok(Self { text: text.into() })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
