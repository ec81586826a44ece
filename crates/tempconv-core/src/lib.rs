pub mod app;
pub mod config;
pub mod error;

pub use app::App;
pub use config::{
    Config, ConverterConfig, LocationConfig, MapConfig, ValidationResult, WeatherConfig,
};
pub use error::{AppError, ConfigError, NetworkError, ReqwestErrorExt, WeatherError};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize logging.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` (e.g. "warn",
/// "debug") is used. Output goes to stderr so stdout stays clean for
/// command results.
pub fn init(default_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("TempConv core initialized");
    Ok(())
}
