pub mod omdb;
pub mod streaming;

use std::time::Duration;

use crate::constants;

/// Build a shared HTTP client with bounded timeouts for API calls.
/// Both API clients reuse it to get connection pooling.
pub fn build_http_client(timeout_secs: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(constants::http::USER_AGENT)
        .pool_max_idle_per_host(constants::http::POOL_MAX_IDLE_PER_HOST)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))
}
