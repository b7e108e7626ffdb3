use anyhow::{Result, anyhow};

/// Default Last.fm REST endpoint
pub const DEFAULT_BASE_URL: &str = "http://ws.audioscrobbler.com/2.0/";

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Build a configuration from raw variable values.
    /// A blank key counts as missing.
    pub fn from_values(api_key: Option<String>, base_url: Option<String>) -> Result<Self> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                anyhow!("Last.fm API key is missing: set LASTFM_API_KEY in your environment or .env file")
            })?;

        let base_url = base_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Config { api_key, base_url })
    }
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    Config::from_values(
        std::env::var("LASTFM_API_KEY").ok(),
        std::env::var("LASTFM_BASE_URL").ok(),
    )
}
