pub mod toml_config;

use crate::core::resolver::DEFAULT_ENDPOINT;
use crate::domain::model::{ApiKey, OutputMode};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::ConfigError;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::time::Duration;
use toml_config::{TomlConfig, MAX_TIMEOUT_SECONDS, MIN_TIMEOUT_SECONDS};

#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "mac-resolver", version)]
#[command(about = "Resolve a MAC address to its vendor via the macaddress.io API")]
pub struct CliConfig {
    #[arg(short = 'm', long, value_name = "XX:XX:XX:XX:XX:XX", help = "MAC address to be resolved")]
    pub mac: String,

    #[arg(
        short = 'k',
        long = "api-key",
        value_name = "KEY",
        help = "API key to authenticate your macaddress.io account"
    )]
    pub api_key: ApiKey,

    #[arg(short, long, help = "Print detailed info, not only the vendor")]
    pub verbose: bool,

    #[arg(short, long, help = "Print {\"<mac>\": \"<vendor>\"} instead of the bare vendor")]
    pub json: bool,

    #[arg(long, value_name = "URL", help = "Override the lookup endpoint")]
    pub endpoint: Option<String>,

    #[arg(short, long, value_name = "SECONDS", help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(short, long, value_name = "FILE", help = "TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, help = "Log output format")]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// CLI 參數優先，其次是設定檔，最後是預設值
    pub fn settings(&self) -> Result<ResolverSettings, ConfigError> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                // 先驗證設定檔本身，錯誤訊息才會指向 service.* 欄位
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let settings = ResolverSettings::merge(
            self.api_key.clone(),
            file.as_ref(),
            self.endpoint.as_deref(),
            self.timeout,
            self.json,
        );
        settings.validate()?;
        Ok(settings)
    }
}

/// Effective resolver settings after merging every configuration source.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    pub api_key: ApiKey,
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub output: OutputMode,
}

impl ResolverSettings {
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            output: OutputMode::Vendor,
        }
    }

    pub fn merge(
        api_key: ApiKey,
        file: Option<&TomlConfig>,
        endpoint: Option<&str>,
        timeout_seconds: Option<u64>,
        json: bool,
    ) -> Self {
        let endpoint = endpoint
            .or_else(|| file.and_then(TomlConfig::endpoint))
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string();
        let timeout_seconds = timeout_seconds.or_else(|| file.and_then(TomlConfig::timeout_seconds));
        // --json 只能開啟，不能關閉設定檔中的 json = true
        let json = json || file.and_then(TomlConfig::json_output).unwrap_or(false);

        Self {
            api_key,
            endpoint,
            timeout_seconds,
            output: OutputMode::from_json_flag(json),
        }
    }
}

impl ConfigProvider for ResolverSettings {
    fn api_key(&self) -> &str {
        self.api_key.expose()
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for ResolverSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_url("endpoint", &self.endpoint)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout", timeout, MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS)?;
        }

        Ok(())
    }
}
