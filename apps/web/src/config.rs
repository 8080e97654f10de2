use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from environment variables.
/// Every setting has a default, so a bare environment is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the matching service; `/match` is appended per request.
    pub api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match var("PORT") {
            Some(port) => port
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            api_url: var("API_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            port,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
