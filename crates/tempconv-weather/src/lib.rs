//! Weather collaborators for TempConv
//!
//! Current conditions from the Open-Meteo API, looked up by device location,
//! by city name, or by tapping a point on the weather map.

pub mod geocode;
pub mod location;
pub mod map;
pub mod provider;
pub mod report;
pub mod retry;
pub mod service;
pub mod types;

pub use geocode::Geocoder;
pub use location::{ConfiguredLocation, LocationProvider};
pub use map::{WeatherMap, WeatherMarker, MARKER_REMOVED};
pub use provider::WeatherProvider;
pub use service::WeatherService;
pub use types::*;
