use std::fmt;
use std::str::FromStr;

use crate::utils::error::ResolverError;

/// Separator used between the six octets of a MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacNotation {
    /// `AA:BB:CC:DD:EE:FF`
    Colon,
    /// `AA-BB-CC-DD-EE-FF`
    Hyphen,
    /// `AA.BB.CC.DD.EE.FF`
    Dot,
    /// `AABBCCDDEEFF`
    Bare,
}

impl MacNotation {
    pub(crate) fn from_separator(sep: &str) -> Option<Self> {
        match sep {
            ":" => Some(Self::Colon),
            "-" => Some(Self::Hyphen),
            "." => Some(Self::Dot),
            "" => Some(Self::Bare),
            _ => None,
        }
    }
}

/// A MAC address that passed validation.
///
/// The caller's original spelling is kept as-is: case and separators are not normalized,
/// and the same text is sent to the lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress {
    raw: String,
    notation: MacNotation,
}

impl MacAddress {
    pub(crate) fn from_validated(raw: &str, notation: MacNotation) -> Self {
        Self {
            raw: raw.to_string(),
            notation,
        }
    }

    pub fn parse(candidate: &str) -> Result<Self, ResolverError> {
        crate::core::validator::validate_mac(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn notation(&self) -> MacNotation {
        self.notation
    }
}

impl FromStr for MacAddress {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Credential for the lookup service. Sent verbatim, never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl FromStr for ApiKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Vendor,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(return_json: bool) -> Self {
        if return_json {
            OutputMode::Json
        } else {
            OutputMode::Vendor
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// Bare vendor name as returned by the service.
    Vendor(String),
    /// `{"<mac>": "<vendor>"}` serialized as JSON text.
    Json(String),
}

impl ResolutionResult {
    pub fn as_str(&self) -> &str {
        match self {
            ResolutionResult::Vendor(text) | ResolutionResult::Json(text) => text,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ResolutionResult::Vendor(text) | ResolutionResult::Json(text) => text,
        }
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound GET as handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl LookupRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
