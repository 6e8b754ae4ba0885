use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_SERP_API_URL: &str = "https://serpapi.com/search.json";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Origins allowed to call the API from a browser.
pub const ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:5173",
    "https://my-frontend-jipf.vercel.app",
];

/// Application configuration loaded from environment variables.
/// Built once in `main` and handed to every component that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub openrouter_url: String,
    pub model: String,
    pub serp_api_key: String,
    pub serp_api_url: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: require_env("OPENROUTER_API_KEY")?,
            openrouter_url: env_or("OPENROUTER_URL", DEFAULT_OPENROUTER_URL),
            model: env_or("OPENROUTER_MODEL", DEFAULT_MODEL),
            serp_api_key: require_env("SERP_API_KEY")?,
            serp_api_url: env_or("SERP_API_URL", DEFAULT_SERP_API_URL),
            port: parse_or(std::env::var("PORT").ok(), DEFAULT_PORT)
                .context("PORT must be a valid port number")?,
            max_upload_bytes: parse_or(
                std::env::var("MAX_UPLOAD_BYTES").ok(),
                DEFAULT_MAX_UPLOAD_BYTES,
            )
            .context("MAX_UPLOAD_BYTES must be a byte count")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parses an optional raw value, falling back to `default` when unset.
fn parse_or<T>(raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => Ok(value.trim().parse::<T>()?),
        None => Ok(default),
    }
}
