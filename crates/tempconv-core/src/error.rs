//! Centralized error types for TempConv.
//!
//! Every failure here is local and non-fatal: it becomes a notice for the
//! user and leaves application state unchanged. `user_message()` gives the
//! notice text, `Display` keeps the detail for logs.

use tempconv_units::{FavoritesError, InputError, UnitParseError};
use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Invalid unit: {0}")]
    UnitParse(#[from] UnitParseError),

    #[error("Favorites error: {0}")]
    Favorites(#[from] FavoritesError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Input(e) => e.user_message(),
            AppError::UnitParse(e) => e.user_message(),
            AppError::Favorites(e) => e.user_message(),
            AppError::Network(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => "Network problem. Check your internet connection.",
            NetworkError::Timeout => "The request timed out. Please try again.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "The server is experiencing issues. Please try again later."
            }
            NetworkError::ServerError { .. } => "The request failed. Please try again.",
            NetworkError::InvalidResponse(_) => {
                "Received an unexpected response. Please try again."
            }
        }
    }
}

/// Config file errors at start-up.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(String),

    #[error("Configuration validation failed: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Load(_) => "Could not read the configuration file.",
            ConfigError::Invalid(_) => {
                "The configuration file has errors. Run 'tempconv config --validate' for details."
            }
        }
    }
}

/// Weather, geocoding and location errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("No city name given")]
    EmptyCity,

    #[error("Weather API error (status {status})")]
    ApiError { status: u16 },

    #[error("Empty response from weather service")]
    EmptyResponse,

    #[error("Unreadable weather response: {0}")]
    InvalidResponse(String),

    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable")]
    LocationUnavailable,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::CityNotFound(_) => "City not found",
            WeatherError::EmptyCity => "Please enter a city name",
            WeatherError::ApiError { .. } => "Weather: API error",
            WeatherError::EmptyResponse => "Weather: empty response",
            WeatherError::InvalidResponse(_) => "Weather: unexpected response",
            WeatherError::InvalidCoordinates => "Those coordinates are off the map.",
            WeatherError::PermissionDenied => "Weather: permission denied",
            WeatherError::LocationUnavailable => "Weather: location unavailable",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_connect() {
            NetworkError::ConnectionFailed(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
