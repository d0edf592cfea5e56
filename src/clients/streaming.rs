use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

use crate::config::StreamingConfig;

/// One streaming service entry for a title. Fields the upstream omits are
/// left empty and the templates skip them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamingOffer {
    pub service: String,

    pub streaming_type: String,

    pub link: String,

    pub quality: String,
}

impl StreamingOffer {
    fn from_value(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            service: text("service"),
            streaming_type: text("streamingType"),
            link: text("link"),
            quality: text("quality"),
        }
    }
}

#[derive(Clone)]
pub struct StreamingClient {
    client: Client,
    base_url: String,
    api_key: String,
    host: String,
}

impl StreamingClient {
    pub fn new(client: Client, config: &StreamingConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            host: config.host.clone(),
        }
    }

    /// Search US streaming availability for a title. Returns the offers in
    /// upstream order; an absent `result[0].streamingInfo.us` path means the
    /// title has no offers and yields an empty list.
    pub async fn search_title(&self, title: &str) -> Result<Vec<StreamingOffer>> {
        let url = format!(
            "{}/search/title?title={}&country=us&show_type=all&output_language=en",
            self.base_url,
            urlencoding::encode(title)
        );
        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Streaming API error: {} - {}",
                status,
                body
            ));
        }

        let body: Value = response.json().await?;

        Ok(extract_us_offers(&body))
    }
}

fn extract_us_offers(body: &Value) -> Vec<StreamingOffer> {
    body.get("result")
        .and_then(Value::as_array)
        .and_then(|results| results.first())
        .and_then(|first| first.get("streamingInfo"))
        .and_then(|info| info.get("us"))
        .and_then(Value::as_array)
        .map(|offers| offers.iter().map(StreamingOffer::from_value).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_offers_in_upstream_order() {
        let body = json!({
            "result": [{
                "streamingInfo": {
                    "us": [
                        {"service": "netflix", "streamingType": "subscription", "link": "https://netflix.example/1"},
                        {"service": "hulu", "streamingType": "subscription"},
                        {"service": "prime", "streamingType": "rent", "quality": "hd"}
                    ]
                }
            }]
        });

        let offers = extract_us_offers(&body);
        let services: Vec<&str> = offers.iter().map(|o| o.service.as_str()).collect();
        assert_eq!(services, vec!["netflix", "hulu", "prime"]);
        assert_eq!(offers[0].link, "https://netflix.example/1");
        assert_eq!(offers[1].link, "");
        assert_eq!(offers[2].quality, "hd");
    }

    #[test]
    fn empty_result_list_yields_no_offers() {
        let body = json!({"result": []});
        assert!(extract_us_offers(&body).is_empty());
    }

    #[test]
    fn missing_streaming_info_yields_no_offers() {
        let body = json!({"result": [{"title": "Inception"}]});
        assert!(extract_us_offers(&body).is_empty());
    }

    #[test]
    fn missing_us_country_yields_no_offers() {
        let body = json!({"result": [{"streamingInfo": {"gb": []}}]});
        assert!(extract_us_offers(&body).is_empty());
    }

    #[test]
    fn unexpected_body_shape_yields_no_offers() {
        assert!(extract_us_offers(&json!("nonsense")).is_empty());
        assert!(extract_us_offers(&json!({})).is_empty());
    }
}
