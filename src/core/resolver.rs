use crate::core::status::StatusReason;
use crate::core::transport::HttpTransport;
use crate::core::validator::validate_mac;
use crate::domain::model::{ApiKey, LookupRequest, MacAddress, OutputMode, ResolutionResult};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{ResolverError, Result, TransportError};
use url::Url;

pub const DEFAULT_SERVICE_HOSTNAME: &str = "macaddress.io";
pub const DEFAULT_ENDPOINT: &str = "https://api.macaddress.io/v1";
pub const AUTH_HEADER: &str = "X-Authentication-Token";

/// Resolves MAC addresses to vendor names through the lookup service.
///
/// Holds only immutable state, so one instance can serve concurrent `resolve` calls.
pub struct MacResolver<T: Transport = HttpTransport> {
    api_key: ApiKey,
    endpoint: String,
    service_name: String,
    transport: T,
}

impl MacResolver<HttpTransport> {
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self::with_transport(api_key, DEFAULT_ENDPOINT, HttpTransport::new())
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let mut transport = HttpTransport::new();
        if let Some(timeout) = config.timeout() {
            transport = transport.with_timeout(timeout);
        }
        Self::with_transport(config.api_key(), config.endpoint(), transport)
    }
}

impl<T: Transport> MacResolver<T> {
    pub fn with_transport(api_key: impl Into<ApiKey>, endpoint: &str, transport: T) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.to_string(),
            service_name: service_name_for(endpoint),
            transport,
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self.service_name = service_name_for(endpoint);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Looks up the vendor of `mac`.
    ///
    /// Validation runs first; an invalid address fails with
    /// [`ResolverError::WrongFormat`] and the transport is never called.
    pub async fn resolve(&self, mac: &str, output: OutputMode) -> Result<ResolutionResult> {
        let mac = validate_mac(mac)?;
        let request = self.build_request(&mac);

        let response = self
            .transport
            .get(&request)
            .await
            .map_err(|source| self.network_error(&mac, source))?;

        if !response.is_success() {
            return Err(self.http_error(&mac, response.status));
        }

        let vendor = response.body;
        match output {
            OutputMode::Vendor => Ok(ResolutionResult::Vendor(vendor)),
            OutputMode::Json => {
                let mut map = serde_json::Map::new();
                map.insert(mac.as_str().to_string(), serde_json::Value::String(vendor));
                Ok(ResolutionResult::Json(serde_json::Value::Object(map).to_string()))
            }
        }
    }

    pub async fn resolve_vendor(&self, mac: &str) -> Result<String> {
        self.resolve(mac, OutputMode::Vendor)
            .await
            .map(ResolutionResult::into_string)
    }

    fn build_request(&self, mac: &MacAddress) -> LookupRequest {
        LookupRequest {
            url: self.endpoint.clone(),
            headers: vec![(AUTH_HEADER.to_string(), self.api_key.expose().to_string())],
            query: vec![
                ("search".to_string(), mac.as_str().to_string()),
                ("output".to_string(), "vendor".to_string()),
            ],
        }
    }

    fn network_error(&self, mac: &MacAddress, source: TransportError) -> ResolverError {
        let what = match source {
            TransportError::Connect(_) => "Connection error",
            TransportError::Timeout(_) => "Timeout",
            TransportError::Other(_) => "Unknown error",
        };
        ResolverError::Network {
            message: format!(
                "{} during processing request to {} for MAC {}.",
                what, self.endpoint, mac
            ),
            source,
        }
    }

    fn http_error(&self, mac: &MacAddress, status: u16) -> ResolverError {
        let reason = StatusReason::from_status(status);
        ResolverError::Http {
            status,
            reason,
            message: format!(
                "Error detected in the response from {} for MAC address {}. \
                 Status code: {}, reason: {}",
                self.endpoint,
                mac,
                status,
                reason.describe(&self.service_name)
            ),
        }
    }
}

/// `https://api.macaddress.io/v1` → `macaddress.io`
fn service_name_for(endpoint: &str) -> String {
    match Url::parse(endpoint) {
        Ok(url) => match url.host_str() {
            Some(host) => host.strip_prefix("api.").unwrap_or(host).to_string(),
            None => endpoint.to_string(),
        },
        Err(_) => endpoint.to_string(),
    }
}
