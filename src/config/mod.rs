use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Model used when CONTRACT_TEXT_MODEL is not set.
const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";

/// Common server settings, shared by every deployment of the service.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Clone)]
pub struct ContractConfig {
    pub server: ServerConfig,
    pub google: GoogleConfig,
    pub model: ModelConfig,
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// None when GOOGLE_API_KEY is unset. The server still starts; the
    /// generation route reports itself unconfigured until a restart with the
    /// key present.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model identifier for contract text generation (e.g. gemini-1.5-flash).
    pub text_model: String,
}

#[derive(Debug, Clone)]
pub struct PromptConfig {
    /// Optional path to an instruction payload file overriding the embedded
    /// default.
    pub path: Option<String>,
}

impl ContractConfig {
    pub fn load() -> Result<Self, AppError> {
        let server = ServerConfig::load()?;

        Ok(ContractConfig {
            server,
            google: GoogleConfig {
                api_key: env::var("GOOGLE_API_KEY").ok(),
            },
            model: ModelConfig {
                text_model: env::var("CONTRACT_TEXT_MODEL")
                    .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
            },
            prompt: PromptConfig {
                path: env::var("CONTRACT_PROMPT_PATH").ok(),
            },
        })
    }
}
