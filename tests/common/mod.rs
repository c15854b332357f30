use namegen_service::config::{AppConfig, OpenAiConfig, ServerConfig};
use namegen_service::services::providers::CompletionProvider;
use namegen_service::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the app on a random port with an injected provider.
    pub async fn spawn_with_provider(
        api_key: &str,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        let config = AppConfig {
            server: ServerConfig { port: 0 },
            openai: OpenAiConfig {
                api_key: api_key.to_string(),
                model: "text-davinci-003".to_string(),
            },
        };

        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");

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
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp { address, client }
    }

    pub async fn post_generate(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/generate", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
