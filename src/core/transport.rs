use crate::domain::model::{LookupRequest, TransportResponse};
use crate::domain::ports::Transport;
use crate::utils::error::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: &LookupRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self.client.get(&request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        builder = builder.query(&request.query);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();

        // 失敗時不檢查 body，讀取錯誤也不影響狀態碼判斷
        let body = if status.is_success() {
            response.text().await?
        } else {
            response.text().await.unwrap_or_default()
        };

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}
