use anyhow::Result;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::config::OmdbConfig;

/// A movie record as returned by the metadata API, passed through to the
/// template verbatim. Only the `Response` flag is interpreted.
#[derive(Debug, Clone)]
pub struct MovieRecord(Map<String, Value>);

impl MovieRecord {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// All key/value pairs in the order the API returned them.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// The API reports misses with `"Response": "False"` rather than an
    /// error status. The flag value is compared case-insensitively.
    fn reports_not_found(&self) -> bool {
        self.field("Response")
            .is_some_and(|flag| flag.eq_ignore_ascii_case("false"))
    }
}

impl From<Map<String, Value>> for MovieRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[derive(Debug)]
pub enum MovieLookup {
    Found(MovieRecord),
    NotFound,
}

#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(client: Client, config: &OmdbConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn lookup_title(&self, title: &str) -> Result<MovieLookup> {
        let url = format!(
            "{}/?t={}&apikey={}",
            self.base_url,
            urlencoding::encode(title),
            urlencoding::encode(&self.api_key)
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("OMDB API error: {} - {}", status, body));
        }

        let record: Map<String, Value> = response.json().await?;
        let record = MovieRecord(record);

        if record.reports_not_found() {
            return Ok(MovieLookup::NotFound);
        }

        Ok(MovieLookup::Found(record))
    }
}
