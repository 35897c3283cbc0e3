use std::sync::Arc;

use ipq_core::{
    config::Config,
    ports::{ReputationPort, SelfIpPort},
};
use ipq_lookup::{IpQualityClient, IpifyClient};

#[tokio::main]
async fn main() -> Result<(), ipq_core::Error> {
    ipq_core::logging::init("ipq")?;

    let cfg = Arc::new(Config::load()?);

    let reputation: Arc<dyn ReputationPort> = Arc::new(IpQualityClient::new(
        cfg.reputation_base_url.clone(),
        cfg.ipqs_api_key.clone(),
        cfg.http_timeout,
    ));
    let self_ip: Arc<dyn SelfIpPort> =
        Arc::new(IpifyClient::new(cfg.self_ip_url.clone(), cfg.http_timeout));

    ipq_telegram::router::run_polling(cfg, reputation, self_ip)
        .await
        .map_err(|e| ipq_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
