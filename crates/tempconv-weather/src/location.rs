use crate::types::{Location, LocationError};
use tempconv_core::LocationConfig;

/// Source of the device's current position.
pub trait LocationProvider: Send + Sync {
    fn current_location(&self) -> Result<Location, LocationError>;
}

/// Location taken from the `[location]` config section.
#[derive(Debug, Clone)]
pub struct ConfiguredLocation {
    enabled: bool,
    coordinates: Option<(f64, f64)>,
}

impl ConfiguredLocation {
    pub fn from_config(config: &LocationConfig) -> Self {
        Self {
            enabled: config.enabled,
            coordinates: config.latitude.zip(config.longitude),
        }
    }

    pub fn fixed(latitude: f64, longitude: f64) -> Self {
        Self {
            enabled: true,
            coordinates: Some((latitude, longitude)),
        }
    }
}

impl LocationProvider for ConfiguredLocation {
    fn current_location(&self) -> Result<Location, LocationError> {
        if !self.enabled {
            return Err(LocationError::PermissionDenied);
        }
        let (latitude, longitude) = self.coordinates.ok_or(LocationError::Unavailable)?;
        Ok(Location::new(latitude, longitude))
    }
}
