use crate::core::status::StatusReason;
use thiserror::Error;

/// Failure reported by a [`Transport`](crate::domain::ports::Transport) before any HTTP
/// status was received.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("transport failure: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("{message}")]
    WrongFormat { message: String },

    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: TransportError,
    },

    #[error("{message}")]
    Http {
        status: u16,
        reason: StatusReason,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    WrongFormat,
    Network,
    Http,
}

impl ResolverError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolverError::WrongFormat { .. } => ErrorKind::WrongFormat,
            ResolverError::Network { .. } => ErrorKind::Network,
            ResolverError::Http { .. } => ErrorKind::Http,
        }
    }

    /// HTTP status returned by the lookup service, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ResolverError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Advisory only: the resolver itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            ResolverError::WrongFormat { .. } => false,
            ResolverError::Network { .. } => true,
            ResolverError::Http { reason, .. } => reason.is_retryable(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::WrongFormat => 1,
            ErrorKind::Network => 2,
            ErrorKind::Http => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ResolverError::WrongFormat { .. } => {
                "Check the MAC address: six pairs of hex digits joined by one of ':', '-', '.' or nothing"
            }
            ResolverError::Network { source, .. } => match source {
                TransportError::Timeout(_) => "Increase --timeout or try again later",
                _ => "Check your network connection and the endpoint URL",
            },
            ResolverError::Http { reason, .. } => match reason {
                StatusReason::InvalidApiKey => "Verify the API key passed with --api-key",
                StatusReason::InsufficientCredit => "Top up the account credits and retry",
                StatusReason::RateLimited | StatusReason::ServerError => "Wait a moment and retry",
                _ => "Inspect the request parameters and the service status",
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ParseError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ResolverError>;
