//! Open-Meteo forecast client.

use crate::retry::{with_retry, RetryConfig};
use crate::types::{CurrentWeather, Location, WeatherCondition, WeatherError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tempconv_core::WeatherConfig;
use tracing::instrument;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<ApiCurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct ApiCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
    retry: RetryConfig,
}

impl WeatherProvider {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.forecast_url.trim_end_matches('/').to_string(),
            retry: RetryConfig::with_max_retries(config.max_retries),
        })
    }

    fn forecast_url(&self, location: &Location) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true&timezone=auto",
            self.base_url, location.latitude, location.longitude
        )
    }

    /// Fetch current conditions at `location`.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_current(&self, location: &Location) -> Result<CurrentWeather, WeatherError> {
        location.validate()?;

        let url = self.forecast_url(location);
        let response = with_retry(&self.retry, || self.client.get(&url).send()).await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Forecast request returned {}", status);
            return Err(WeatherError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_current_weather(&body)
    }
}

fn parse_current_weather(body: &str) -> Result<CurrentWeather, WeatherError> {
    if body.trim().is_empty() {
        return Err(WeatherError::EmptyResponse);
    }

    let parsed: ForecastResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Parse(e.to_string()))?;

    let current = parsed
        .current_weather
        .ok_or_else(|| WeatherError::Parse("missing current_weather".to_string()))?;

    tracing::debug!(
        "Current weather: {}°C, wind {} km/h, code {}",
        current.temperature,
        current.windspeed,
        current.weathercode
    );

    Ok(CurrentWeather {
        temperature: current.temperature,
        wind_speed: current.windspeed,
        weather_code: current.weathercode,
        condition: WeatherCondition::from_wmo_code(current.weathercode),
    })
}
