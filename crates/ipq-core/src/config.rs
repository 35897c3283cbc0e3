use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Typed configuration, loaded once at startup.
///
/// Both credentials are required; the process refuses to start without them
/// rather than degrading into a bot that cannot answer anything.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,
    pub ipqs_api_key: String,

    /// Discovery endpoint returning the caller's public IP.
    pub self_ip_url: String,
    /// Reputation endpoint base; the API key and target IP are appended as
    /// path segments.
    pub reputation_base_url: String,

    /// Shared transport timeout for both HTTP clients.
    pub http_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if telegram_bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let ipqs_api_key = env_str("IPQUALITYSCORE_API_KEY").unwrap_or_default();
        if ipqs_api_key.trim().is_empty() {
            return Err(Error::Config(
                "IPQUALITYSCORE_API_KEY environment variable is required".to_string(),
            ));
        }

        let self_ip_url = env_str("SELF_IP_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| "http://api.ipify.org".to_string());
        let reputation_base_url = env_str("REPUTATION_BASE_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| "https://ipqualityscore.com/api/json/ip".to_string());

        let http_timeout = Duration::from_secs(env_u64("HTTP_TIMEOUT_SECS").unwrap_or(10));

        Ok(Self {
            telegram_bot_token,
            ipqs_api_key,
            self_ip_url,
            reputation_base_url,
            http_timeout,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
