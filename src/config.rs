use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use url::Url;
use crate::error::{AppError, Result};

pub const DEFAULT_MERCURY_URL: &str = "https://mercury.postlight.com/parser";
pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub mercury_url: Url,
    pub mercury_token: String,
    pub youtube_api_url: Url,
    pub youtube_token: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Missing tokens
    /// are allowed; upstream will reject the calls instead.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mercury_token = lookup("MERCURY_TOKEN").unwrap_or_default();
        let youtube_token = lookup("YOUTUBE_TOKEN").unwrap_or_default();
        if mercury_token.is_empty() {
            tracing::warn!("MERCURY_TOKEN is not set, /article requests will be rejected upstream");
        }
        if youtube_token.is_empty() {
            tracing::warn!("YOUTUBE_TOKEN is not set, /youtube requests will be rejected upstream");
        }

        let mercury_url = parse_endpoint(
            "MERCURY_URL",
            lookup("MERCURY_URL").as_deref().unwrap_or(DEFAULT_MERCURY_URL),
        )?;
        let youtube_api_url = parse_endpoint(
            "YOUTUBE_API_URL",
            lookup("YOUTUBE_API_URL").as_deref().unwrap_or(DEFAULT_YOUTUBE_API_URL),
        )?;

        // Load server configuration with defaults
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        Ok(Config {
            server_addr,
            mercury_url,
            mercury_token,
            youtube_api_url,
            youtube_token,
        })
    }
}

fn parse_endpoint(key: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| AppError::ConfigError(format!("Invalid {}: {}", key, e)))
}
