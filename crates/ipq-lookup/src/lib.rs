//! HTTP adapters for the external IP services (reqwest).
//!
//! `IpifyClient` implements self-IP discovery and `IpQualityClient` the
//! reputation lookup. Both share the bot-wide transport timeout and map
//! their failures into `ipq-core` error variants for uniform handling; no
//! retries anywhere, a failed call is terminal for its chat turn.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use ipq_core::{
    errors::Error,
    ports::{ReputationPort, SelfIpPort},
    reputation::ReputationRecord,
    Result,
};

fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("reqwest client build")
}

// ============== Self-IP discovery ==============

#[derive(Debug, Deserialize)]
struct IpifyResponse {
    ip: String,
}

#[derive(Clone, Debug)]
pub struct IpifyClient {
    url: String,
    http: reqwest::Client,
}

impl IpifyClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            http: http_client(timeout),
        }
    }
}

/// Intermediaries must not serve a stale address, so every call carries a
/// fresh millisecond timestamp in the query string.
fn cache_busted(url: &str, timestamp_ms: i64) -> String {
    format!("{url}?format=json&_={timestamp_ms}")
}

#[async_trait]
impl SelfIpPort for IpifyClient {
    async fn resolve(&self) -> Result<String> {
        let url = cache_busted(&self.url, chrono::Utc::now().timestamp_millis());

        let resp = self
            .http
            .get(url)
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| Error::Network(format!("self-ip request error: {e}")))?;

        if !resp.status().is_success() {
            return Err(Error::Network(format!(
                "self-ip lookup failed: {}",
                resp.status()
            )));
        }

        let body: IpifyResponse = resp
            .json()
            .await
            .map_err(|e| Error::Network(format!("self-ip json error: {e}")))?;

        Ok(body.ip)
    }
}

// ============== Reputation lookup ==============

#[derive(Clone, Debug)]
pub struct IpQualityClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl IpQualityClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: http_client(timeout),
        }
    }
}

/// The upstream keys requests by path: `<base>/<api_key>/<ip>`.
fn reputation_url(base_url: &str, api_key: &str, ip: &str) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), api_key, ip)
}

#[async_trait]
impl ReputationPort for IpQualityClient {
    async fn lookup(&self, ip: &str) -> Result<ReputationRecord> {
        let url = reputation_url(&self.base_url, &self.api_key, ip);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Reputation(format!("reputation request error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Reputation(format!(
                "reputation lookup failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let v: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| Error::Reputation(format!("reputation json error: {e}")))?;

        // A decodable payload is always projected, even when fields are
        // missing; the classifier tolerates an absent fraud score.
        Ok(ReputationRecord::from_value(&v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reputation_url_embeds_key_and_ip_as_path_segments() {
        assert_eq!(
            reputation_url("https://ipqualityscore.com/api/json/ip", "KEY123", "8.8.8.8"),
            "https://ipqualityscore.com/api/json/ip/KEY123/8.8.8.8"
        );
    }

    #[test]
    fn reputation_url_tolerates_trailing_slash() {
        assert_eq!(
            reputation_url("https://example.com/api/", "k", "1.2.3.4"),
            "https://example.com/api/k/1.2.3.4"
        );
    }

    #[test]
    fn cache_busting_varies_with_timestamp() {
        let a = cache_busted("http://api.ipify.org", 1_000);
        let b = cache_busted("http://api.ipify.org", 2_000);
        assert_eq!(a, "http://api.ipify.org?format=json&_=1000");
        assert_ne!(a, b);
    }
}
