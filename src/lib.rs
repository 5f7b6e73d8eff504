pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, ResolverSettings};
pub use crate::core::{
    resolver::{MacResolver, DEFAULT_ENDPOINT},
    status::StatusReason,
    transport::HttpTransport,
    validator::validate_mac,
};
pub use domain::model::{ApiKey, MacAddress, MacNotation, OutputMode, ResolutionResult};
pub use utils::error::{ConfigError, ErrorKind, ResolverError, Result, TransportError};
