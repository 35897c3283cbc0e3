use async_trait::async_trait;

use crate::{reputation::ReputationRecord, Result};

/// Port for discovering the caller's own public IP.
///
/// Implementations must defeat intermediary caching so repeated calls
/// reflect the current address, not a stale one.
#[async_trait]
pub trait SelfIpPort: Send + Sync {
    async fn resolve(&self) -> Result<String>;
}

/// Port for the external IP reputation service.
///
/// One IP in, one record out; no retry, no batching. Failures surface as
/// `Error::Reputation` for uniform handling in the pipeline.
#[async_trait]
pub trait ReputationPort: Send + Sync {
    async fn lookup(&self, ip: &str) -> Result<ReputationRecord>;
}
