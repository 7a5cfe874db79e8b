use anyhow::{Context, Result};

const DEFAULT_MODEL_NAME: &str = "gpt-4.1-mini";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// Tokens of this length or shorter are never keywords.
pub const DEFAULT_KEYWORD_MIN_LENGTH: usize = 3;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model_name: String,
    pub openai_base_url: String,
    pub keyword_min_length: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_model_name: std::env::var("OPENAI_MODEL_NAME")
                .unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            keyword_min_length: std::env::var("KEYWORD_MIN_LENGTH")
                .unwrap_or_else(|_| DEFAULT_KEYWORD_MIN_LENGTH.to_string())
                .parse::<usize>()
                .context("KEYWORD_MIN_LENGTH must be a non-negative integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}
