use serde::{Deserialize, Serialize};
use tempconv_core::{AppError, ReqwestErrorExt, WeatherError as CoreWeatherError};

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    ClearSky,
    MainlyClear,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    RainShowers,
    Thunderstorm,
    ThunderstormWithHail,
    Unknown,
}

impl WeatherCondition {
    /// Convert WMO weather code to WeatherCondition
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::ClearSky,
            1 | 2 => Self::MainlyClear,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 56 | 57 => Self::Drizzle,
            61 | 63 | 65 | 66 | 67 => Self::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            80..=82 => Self::RainShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::Overcast => "Overcast",
            Self::Fog => "Foggy",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::RainShowers => "Rain showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithHail => "Thunderstorm with hail",
            Self::Unknown => "Unknown weather",
        }
    }
}

/// Geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city_name: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city_name: None,
        }
    }

    /// Reject points off the globe (NaN included).
    pub fn validate(&self) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&self.latitude)
            || !(-180.0..=180.0).contains(&self.longitude)
        {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }
}

/// A geocoded city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    /// "Paris, France", or just the name when the country is unknown
    pub fn label(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }

    pub fn location(&self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            city_name: Some(self.label()),
        }
    }
}

/// Current weather conditions, in API units (°C, km/h)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub wind_speed: f64,
    pub weather_code: i32,
    pub condition: WeatherCondition,
}

/// Current weather at a location, ready for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Place label, set when the lookup started from a city name
    pub place: Option<String>,
    pub location: Location,
    pub current: CurrentWeather,
}

/// Location service errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable")]
    Unavailable,
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("API error: HTTP {status}")]
    Api { status: u16 },
    #[error("Empty response")]
    EmptyResponse,
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("City not found: {0}")]
    CityNotFound(String),
    #[error("No city name given")]
    EmptyCity,
    #[error("Invalid coordinates")]
    InvalidCoordinates,
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::Network(err) => AppError::Network(err.into_network_error()),
            WeatherError::Location(LocationError::PermissionDenied) => {
                AppError::Weather(CoreWeatherError::PermissionDenied)
            }
            WeatherError::Location(LocationError::Unavailable) => {
                AppError::Weather(CoreWeatherError::LocationUnavailable)
            }
            WeatherError::Api { status } => AppError::Weather(CoreWeatherError::ApiError { status }),
            WeatherError::EmptyResponse => AppError::Weather(CoreWeatherError::EmptyResponse),
            WeatherError::Parse(s) => AppError::Weather(CoreWeatherError::InvalidResponse(s)),
            WeatherError::CityNotFound(s) => AppError::Weather(CoreWeatherError::CityNotFound(s)),
            WeatherError::EmptyCity => AppError::Weather(CoreWeatherError::EmptyCity),
            WeatherError::InvalidCoordinates => {
                AppError::Weather(CoreWeatherError::InvalidCoordinates)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wmo_code_clear() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::ClearSky);
    }

    #[test]
    fn test_wmo_code_mainly_clear() {
        assert_eq!(WeatherCondition::from_wmo_code(1), WeatherCondition::MainlyClear);
        assert_eq!(WeatherCondition::from_wmo_code(2), WeatherCondition::MainlyClear);
    }

    #[test]
    fn test_wmo_code_overcast() {
        assert_eq!(WeatherCondition::from_wmo_code(3), WeatherCondition::Overcast);
    }

    #[test]
    fn test_wmo_code_fog() {
        assert_eq!(WeatherCondition::from_wmo_code(45), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_wmo_code(48), WeatherCondition::Fog);
    }

    #[test]
    fn test_wmo_code_drizzle() {
        for code in [51, 53, 55, 56, 57] {
            assert_eq!(WeatherCondition::from_wmo_code(code), WeatherCondition::Drizzle);
        }
    }

    #[test]
    fn test_wmo_code_rain() {
        for code in [61, 63, 65, 66, 67] {
            assert_eq!(WeatherCondition::from_wmo_code(code), WeatherCondition::Rain);
        }
    }

    #[test]
    fn test_wmo_code_snow() {
        for code in [71, 73, 75, 77, 85, 86] {
            assert_eq!(WeatherCondition::from_wmo_code(code), WeatherCondition::Snow);
        }
    }

    #[test]
    fn test_wmo_code_showers() {
        for code in [80, 81, 82] {
            assert_eq!(WeatherCondition::from_wmo_code(code), WeatherCondition::RainShowers);
        }
    }

    #[test]
    fn test_wmo_code_thunderstorm() {
        assert_eq!(WeatherCondition::from_wmo_code(95), WeatherCondition::Thunderstorm);
        assert_eq!(
            WeatherCondition::from_wmo_code(96),
            WeatherCondition::ThunderstormWithHail
        );
        assert_eq!(
            WeatherCondition::from_wmo_code(99),
            WeatherCondition::ThunderstormWithHail
        );
    }

    #[test]
    fn test_wmo_code_unknown() {
        assert_eq!(WeatherCondition::from_wmo_code(999), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_wmo_code(-1), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::Unknown.description(), "Unknown weather");
    }

    #[test]
    fn test_condition_description() {
        assert_eq!(WeatherCondition::ClearSky.description(), "Clear sky");
        assert_eq!(WeatherCondition::Fog.description(), "Foggy");
    }

    #[test]
    fn test_location_validation() {
        assert!(Location::new(48.8566, 2.3522).validate().is_ok());
        assert!(Location::new(-90.0, 180.0).validate().is_ok());
        assert!(matches!(
            Location::new(90.5, 0.0).validate(),
            Err(WeatherError::InvalidCoordinates)
        ));
        assert!(Location::new(0.0, -181.0).validate().is_err());
        assert!(Location::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_place_label() {
        let mut place = Place {
            name: "Paris".into(),
            country: Some("France".into()),
            latitude: 48.85,
            longitude: 2.35,
        };
        assert_eq!(place.label(), "Paris, France");
        assert_eq!(place.location().city_name.as_deref(), Some("Paris, France"));

        place.country = None;
        assert_eq!(place.label(), "Paris");
    }

    #[test]
    fn test_error_mapping_to_app_error() {
        let app: AppError = WeatherError::Location(LocationError::PermissionDenied).into();
        assert_eq!(app.user_message(), "Weather: permission denied");

        let app: AppError = WeatherError::Location(LocationError::Unavailable).into();
        assert_eq!(app.user_message(), "Weather: location unavailable");

        let app: AppError = WeatherError::CityNotFound("Atlantis".into()).into();
        assert_eq!(app.user_message(), "City not found");

        let app: AppError = WeatherError::Api { status: 500 }.into();
        assert!(matches!(
            app,
            AppError::Weather(CoreWeatherError::ApiError { status: 500 })
        ));
    }
}
