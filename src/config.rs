use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,

    pub http: HttpConfig,

    pub omdb: OmdbConfig,

    pub streaming: StreamingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,

    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Timeout for outbound API calls. Expiry is treated as a transport
    /// failure by the handlers.
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    pub base_url: String,

    #[serde(skip_serializing)]
    pub api_key: String,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            base_url: "http://www.omdbapi.com".to_string(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamingConfig {
    pub base_url: String,

    /// Value for the X-RapidAPI-Host header the upstream expects.
    pub host: String,

    #[serde(skip_serializing)]
    pub api_key: String,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://streaming-availability.p.rapidapi.com".to_string(),
            host: "streaming-availability.p.rapidapi.com".to_string(),
            api_key: String::new(),
        }
    }
}

impl Config {
    /// Build the configuration from the process environment. The two API
    /// keys are required; everything else falls back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        config.omdb.api_key = std::env::var("OMDB_KEY").context("OMDB_KEY must be set")?;
        config.streaming.api_key =
            std::env::var("RAPID_API_KEY").context("RAPID_API_KEY must be set")?;

        if let Ok(url) = std::env::var("OMDB_URL") {
            config.omdb.base_url = url;
        }
        if let Ok(url) = std::env::var("STREAMING_URL") {
            config.streaming.base_url = url;
        }
        if let Ok(addr) = std::env::var("BIND_ADDRESS") {
            config.server.bind_address = addr;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse().context("PORT must be a valid port number")?;
        }
        if let Ok(timeout) = std::env::var("REQUEST_TIMEOUT_SECS") {
            config.http.request_timeout_secs = timeout
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a number")?;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.omdb.api_key.trim().is_empty() {
            bail!("OMDB API key is empty");
        }
        if self.streaming.api_key.trim().is_empty() {
            bail!("Streaming API key is empty");
        }
        Ok(())
    }
}
