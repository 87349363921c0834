use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Where raw API payloads come from. Transport and authentication live behind
/// this port, outside the mapping layer.
#[async_trait]
pub trait PayloadSource: Send + Sync {
    async fn load(&self, name: &str) -> Result<Value>;
}
