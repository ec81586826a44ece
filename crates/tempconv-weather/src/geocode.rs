//! Geocoding in both directions.
//!
//! City names resolve to coordinates through the Open-Meteo geocoding API.
//! Coordinates resolve to place names through Nominatim (OpenStreetMap);
//! that direction is best-effort and never fails the caller.

use crate::retry::{with_retry, RetryConfig};
use crate::types::{Location, Place, WeatherError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tempconv_core::WeatherConfig;
use tracing::instrument;

const USER_AGENT: &str = concat!("tempconv/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    state_district: Option<String>,
    state: Option<String>,
    county: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    search_url: String,
    reverse_url: String,
    retry: RetryConfig,
}

impl Geocoder {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            search_url: config.geocoding_url.trim_end_matches('/').to_string(),
            reverse_url: config.reverse_geocoding_url.trim_end_matches('/').to_string(),
            retry: RetryConfig::with_max_retries(config.max_retries),
        })
    }

    /// Resolve a city name to its best match.
    #[instrument(skip(self), level = "info")]
    pub async fn search_city(&self, name: &str) -> Result<Place, WeatherError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.search_url,
            urlencoding::encode(name)
        );

        let response = with_retry(&self.retry, || self.client.get(&url).send()).await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Geocoding request returned {}", status);
            return Err(WeatherError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(WeatherError::EmptyResponse);
        }

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        let first = parsed
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| WeatherError::CityNotFound(name.to_string()))?;

        let place = Place {
            name: first.name,
            country: first.country,
            latitude: first.latitude,
            longitude: first.longitude,
        };
        tracing::info!("Geocoded {:?} to {}", name, place.label());
        Ok(place)
    }

    /// Reverse geocode coordinates to a human-readable place name (e.g. "Lyon, Auvergne-Rhône-Alpes").
    /// Returns `None` on failure; the caller can fall back to a generic label.
    pub async fn reverse(&self, location: &Location) -> Option<String> {
        if location.city_name.is_some() {
            return location.city_name.clone();
        }

        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json&addressdetails=1&layer=address&zoom=10",
            self.reverse_url, location.latitude, location.longitude
        );

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("Reverse geocode request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Reverse geocode returned status {}", response.status());
            return None;
        }

        let body: NominatimResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!("Reverse geocode parse error: {}", e);
                return None;
            }
        };

        let result = place_label(body.address?)?;
        tracing::info!("Reverse geocoded to: {}", result);
        Some(result)
    }
}

/// Most specific place name, qualified by state or country when that differs.
fn place_label(addr: NominatimAddress) -> Option<String> {
    let state = addr.state.clone();
    let country = addr.country.clone();

    let place = addr
        .city
        .or(addr.town)
        .or(addr.village)
        .or(addr.municipality)
        .or(addr.state_district)
        .or(addr.county)
        .or(addr.state)
        .or(addr.country)?;

    let suffix = [state, country]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty() && *s != place);

    Some(match suffix {
        Some(s) => format!("{}, {}", place, s),
        None => place,
    })
}
