use anyhow::Context;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "text-davinci-003";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for the completions endpoint. May be empty: a missing key is
    /// not a startup failure, requests answer 500 until the operator sets it.
    pub api_key: String,
    pub model: String,
}

fn default_port() -> u16 {
    8080
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let server = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()
            .context("Failed to build server configuration")?
            .try_deserialize()
            .context("Failed to deserialize server configuration")?;

        Ok(AppConfig {
            server,
            openai: OpenAiConfig {
                api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            },
        })
    }

    /// Whether a usable API key is present.
    pub fn has_api_key(&self) -> bool {
        !self.openai.api_key.trim().is_empty()
    }
}
