use anyhow::Context;
use clap::Parser;
use mac_resolver::utils::logger;
use mac_resolver::{CliConfig, MacResolver, ResolutionResult};

// 與格式錯誤相同：需要使用者修正輸入
const EXIT_CONFIG_ERROR: i32 = 1;

#[tokio::main]
async fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(EXIT_CONFIG_ERROR);
        }
        // --help / --version
        Err(e) => e.exit(),
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.settings().context("invalid configuration") {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    tracing::debug!(
        "Instantiating resolver for {} (timeout: {:?})",
        settings.endpoint,
        settings.timeout_seconds
    );
    let resolver = MacResolver::from_config(&settings);

    match resolver.resolve(&config.mac, settings.output).await {
        Ok(result) => {
            match &result {
                ResolutionResult::Vendor(vendor) => tracing::info!(
                    "✅ MAC address {} is associated with vendor \"{}\"",
                    config.mac,
                    vendor
                ),
                ResolutionResult::Json(json) => {
                    tracing::info!("✅ MAC address {} resolved: {}", config.mac, json)
                }
            }
            println!("{}", result);
        }
        Err(e) => {
            tracing::error!("❌ {} (kind: {:?})", e, e.kind());
            if let Some(source) = std::error::Error::source(&e) {
                tracing::debug!("Transport detail: {}", source);
            }
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            if e.is_retryable() {
                tracing::debug!("The failure is transient; retrying later may succeed");
            }
            std::process::exit(e.exit_code());
        }
    }
}
