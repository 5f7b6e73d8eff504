/// Meaning of a non-2xx status from the lookup service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusReason {
    InvalidParameters,
    InvalidApiKey,
    InsufficientCredit,
    InvalidMacAddress,
    RateLimited,
    ServerError,
    Unknown,
}

impl StatusReason {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => StatusReason::InvalidParameters,
            401 => StatusReason::InvalidApiKey,
            402 => StatusReason::InsufficientCredit,
            422 => StatusReason::InvalidMacAddress,
            429 => StatusReason::RateLimited,
            500 => StatusReason::ServerError,
            _ => StatusReason::Unknown,
        }
    }

    /// Human-readable reason; `service` names the lookup provider (e.g. `macaddress.io`).
    pub fn describe(&self, service: &str) -> String {
        match self {
            // 只送出經過驗證的參數，理論上不會發生
            StatusReason::InvalidParameters => "Invalid parameters.".to_string(),
            StatusReason::InvalidApiKey => {
                "Access restricted. Enter the correct API key.".to_string()
            }
            StatusReason::InsufficientCredit => format!(
                "Access restricted. Check the credits balance on the account of {} \
                 associated with provided API key.",
                service
            ),
            // 本地已驗證過 MAC，理論上不會發生
            StatusReason::InvalidMacAddress => "Invalid MAC address was received.".to_string(),
            StatusReason::RateLimited => {
                "Too many requests. Try your call again later.".to_string()
            }
            StatusReason::ServerError => format!(
                "Internal server error. Try again or contact {}.",
                service
            ),
            StatusReason::Unknown => "Unknown error.".to_string(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, StatusReason::RateLimited | StatusReason::ServerError)
    }
}
