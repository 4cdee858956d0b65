//! Configuration module for the YILDIRIM backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default base URL of the generative-text API.
pub const DEFAULT_GENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for admin API authentication (required in production)
    pub api_psk: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// API key for the generative-text upstream (writing assistant)
    pub genai_api_key: Option<String>,
    /// Base URL of the generative-text upstream
    pub genai_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_psk = env::var("YILDIRIM_API_PSK").ok();

        let db_path = env::var("YILDIRIM_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let bind_addr = env::var("YILDIRIM_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid YILDIRIM_BIND_ADDR format");

        let log_level = env::var("YILDIRIM_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        // The hosted deployment configured GEMINI_API_KEY; accept it as a fallback.
        // Trim to avoid copy-paste errors.
        let genai_api_key = env::var("YILDIRIM_GENAI_API_KEY")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let genai_base_url = env::var("YILDIRIM_GENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GENAI_BASE_URL.to_string());

        Self {
            api_psk,
            db_path,
            bind_addr,
            log_level,
            genai_api_key,
            genai_base_url,
        }
    }
}
