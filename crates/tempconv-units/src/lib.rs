//! Temperature units for TempConv
//!
//! Pure conversion between Celsius, Fahrenheit and Kelvin, plus the
//! session-owned registry of favorite unit pairs.

pub mod convert;
pub mod error;
pub mod favorites;
pub mod input;
pub mod unit;

pub use convert::{convert, from_celsius, to_celsius};
pub use error::{FavoritesError, InputError, UnitParseError};
pub use favorites::{AddOutcome, FavoriteConversion, FavoritesRegistry};
pub use input::{format_result, parse_value};
pub use unit::TemperatureUnit;
