//! Weather lookups the way the app offers them: here, by city, or at a point.

use tempconv_core::Config;

use crate::geocode::Geocoder;
use crate::location::{ConfiguredLocation, LocationProvider};
use crate::provider::WeatherProvider;
use crate::types::{Location, WeatherError, WeatherReport};

pub struct WeatherService {
    provider: WeatherProvider,
    geocoder: Geocoder,
    location: Box<dyn LocationProvider>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("provider", &self.provider)
            .field("geocoder", &self.geocoder)
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        Ok(Self {
            provider: WeatherProvider::new(&config.weather)?,
            geocoder: Geocoder::new(&config.weather)?,
            location: Box::new(ConfiguredLocation::from_config(&config.location)),
        })
    }

    /// Replace the device location source.
    pub fn with_location_provider(mut self, provider: impl LocationProvider + 'static) -> Self {
        self.location = Box::new(provider);
        self
    }

    /// Weather at the device's current position.
    pub async fn at_current_location(&self) -> Result<WeatherReport, WeatherError> {
        let location = self.location.current_location()?;
        tracing::info!("Got location: {}, {}", location.latitude, location.longitude);
        self.fetch(location, None).await
    }

    /// Weather for the best match of a city name.
    pub async fn for_city(&self, name: &str) -> Result<WeatherReport, WeatherError> {
        let place = self.geocoder.search_city(name).await?;
        let label = place.label();
        self.fetch(place.location(), Some(label)).await
    }

    /// Weather at arbitrary coordinates.
    pub async fn at(&self, latitude: f64, longitude: f64) -> Result<WeatherReport, WeatherError> {
        self.fetch(Location::new(latitude, longitude), None).await
    }

    /// Best-effort place name for a point.
    pub async fn place_name(&self, location: &Location) -> Option<String> {
        self.geocoder.reverse(location).await
    }

    async fn fetch(
        &self,
        location: Location,
        place: Option<String>,
    ) -> Result<WeatherReport, WeatherError> {
        let current = self.provider.fetch_current(&location).await?;
        Ok(WeatherReport {
            place,
            location,
            current,
        })
    }
}
