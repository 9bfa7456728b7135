use contract_service::config::{
    ContractConfig, GoogleConfig, ModelConfig, PromptConfig, ServerConfig,
};
use contract_service::services::providers::TextProvider;
use contract_service::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the application on a random port with an explicit provider
    /// handle. Passing `None` starts the server in its unconfigured state.
    pub async fn spawn(provider: Option<Arc<dyn TextProvider>>) -> Self {
        let app = Application::with_provider(test_config(), provider)
            .await
            .expect("Failed to build test application");

        Self::run(app).await
    }

    /// Spawn through the full startup path. The test config carries no API
    /// key, so this exercises the degraded-start branch without touching the
    /// network.
    pub async fn spawn_unconfigured() -> Self {
        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");

        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}

pub fn test_config() -> ContractConfig {
    // Port 0 asks the OS for a free port so tests can run in parallel
    ContractConfig {
        server: ServerConfig { port: 0 },
        google: GoogleConfig { api_key: None },
        model: ModelConfig {
            text_model: "gemini-test".to_string(),
        },
        prompt: PromptConfig { path: None },
    }
}
