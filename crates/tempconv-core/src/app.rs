use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::config::{Config, ValidationResult};
use crate::error::AppError;

/// Main application state and lifecycle manager
#[derive(Debug)]
pub struct App {
    config: Arc<Config>,
    validation: ValidationResult,
}

impl App {
    /// Create a new application instance, loading and validating configuration.
    ///
    /// With `config_path` unset the per-user config file is used.
    pub fn new(config_path: Option<&Path>) -> Result<Self, AppError> {
        let (config, validation) = Config::load_validated(config_path)?;
        Ok(Self::with_config(config, validation))
    }

    /// Create an application around an already loaded configuration
    pub fn with_config(config: Config, validation: ValidationResult) -> Self {
        Self {
            config: Arc::new(config),
            validation,
        }
    }

    pub fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            "Initializing application ({} config warnings)",
            self.validation.warnings.len()
        );
        Ok(())
    }

    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared handle to the config, for services that outlive a borrow
    pub fn shared_config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }

    /// Warnings raised while validating the loaded config
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_new_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut app = App::new(Some(&path)).unwrap();
        app.initialize().unwrap();
        assert!(path.exists());
        assert!(app.validation().is_valid());
        app.shutdown().unwrap();
    }

    #[test]
    fn test_shared_config_points_at_same_config() {
        let app = App::with_config(Config::default(), ValidationResult::default());
        let shared = app.shared_config();
        assert_eq!(shared.map.zoom, app.config().map.zoom);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[location]\nlatitude = 95.0\nlongitude = 0.0\n").unwrap();

        let err = App::new(Some(&path)).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid(_))));
    }
}
