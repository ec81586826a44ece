//! State behind the weather map screen.
//!
//! A tap fetches the weather at that point and drops a marker there, replacing
//! the previous one. A long press removes it. Tiles, gestures and drawing
//! belong to whatever renders this state.

use tempconv_core::MapConfig;
use tempconv_units::{convert, TemperatureUnit};

use crate::service::WeatherService;
use crate::types::{Location, WeatherError};

const DEFAULT_MARKER_LABEL: &str = "Weather";

/// Status line after a long press removed a marker
pub const MARKER_REMOVED: &str = "Marker removed.";

/// A weather reading pinned to a map point (°C, km/h).
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherMarker {
    pub location: Location,
    pub label: String,
    pub temperature: f64,
    pub wind_speed: f64,
}

impl WeatherMarker {
    /// Info bubble text
    pub fn title(&self, unit: TemperatureUnit) -> String {
        format!(
            "{}\nTemp: {:.1}{}\nWind: {:.1} km/h",
            self.label,
            convert(self.temperature, TemperatureUnit::Celsius, unit),
            unit.symbol(),
            self.wind_speed
        )
    }
}

#[derive(Debug, Clone)]
pub struct WeatherMap {
    center: Location,
    zoom: f64,
    unit: TemperatureUnit,
    marker: Option<WeatherMarker>,
}

impl WeatherMap {
    pub fn new(config: &MapConfig, unit: TemperatureUnit) -> Self {
        Self {
            center: Location::new(config.center_latitude, config.center_longitude),
            zoom: config.zoom,
            unit,
            marker: None,
        }
    }

    /// The marker currently on screen, if any
    pub fn visible_marker(&self) -> Option<&WeatherMarker> {
        self.marker.as_ref()
    }

    /// Show `marker` in place of the one shown before it.
    pub fn place_marker(&mut self, marker: WeatherMarker) -> &WeatherMarker {
        tracing::debug!(
            "Placing marker at {}, {}",
            marker.location.latitude,
            marker.location.longitude
        );
        self.marker.insert(marker)
    }

    /// Status line describing the viewport
    pub fn viewport_text(&self) -> String {
        format!(
            "Map center: {:.4}, {:.4} (zoom {:.0})",
            self.center.latitude, self.center.longitude, self.zoom
        )
    }

    /// Fetch the weather at the tapped point and mark it.
    pub async fn tap(
        &mut self,
        service: &WeatherService,
        latitude: f64,
        longitude: f64,
    ) -> Result<&WeatherMarker, WeatherError> {
        let report = service.at(latitude, longitude).await?;
        let label = service
            .place_name(&report.location)
            .await
            .unwrap_or_else(|| DEFAULT_MARKER_LABEL.to_string());

        Ok(self.place_marker(WeatherMarker {
            location: report.location,
            label,
            temperature: report.current.temperature,
            wind_speed: report.current.wind_speed,
        }))
    }

    /// Remove the shown marker. Returns false when nothing is shown.
    pub fn long_press(&mut self) -> bool {
        self.marker.take().is_some()
    }

    /// Status line under the map
    pub fn info_text(&self) -> Option<String> {
        self.visible_marker().map(|marker| {
            format!(
                "Weather: {:.1}{} - Wind {:.1} km/h\n(Tap for more, Long press to remove)",
                convert(marker.temperature, TemperatureUnit::Celsius, self.unit),
                self.unit.symbol(),
                marker.wind_speed
            )
        })
    }
}
