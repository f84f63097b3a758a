use anyhow::{Context, Result};

const DEFAULT_JOBS_API_URL: &str = "https://jsearch.p.rapidapi.com/search";
const DEFAULT_JOBS_API_HOST: &str = "jsearch.p.rapidapi.com";
const DEFAULT_MAX_UPLOAD_BYTES: &str = "10485760"; // 10 MiB

/// Application configuration loaded from environment variables.
/// Startup fails if the job-search credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub jobs_api_key: String,
    pub jobs_api_host: String,
    pub jobs_api_url: String,
    pub jobs_country: String,
    pub jobs_request_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jobs_api_key: require_env("JOBS_API_KEY")?,
            jobs_api_host: env_or("JOBS_API_HOST", DEFAULT_JOBS_API_HOST),
            jobs_api_url: env_or("JOBS_API_URL", DEFAULT_JOBS_API_URL),
            jobs_country: env_or("JOBS_COUNTRY", "IN"),
            jobs_request_timeout_secs: env_or("JOBS_REQUEST_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("JOBS_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
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
