use crate::domain::model::{LookupRequest, TransportResponse};
use crate::utils::error::TransportError;
use async_trait::async_trait;
use std::time::Duration;

/// Executes a single HTTP GET against the lookup service.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, request: &LookupRequest) -> Result<TransportResponse, TransportError>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
}
