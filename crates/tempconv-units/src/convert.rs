//! Conversion engine.
//!
//! Every conversion is staged through Celsius: `to_celsius` then
//! `from_celsius`. Same-unit requests return the input untouched.

use crate::unit::TemperatureUnit;

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Express `value` (in `unit`) in Celsius.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
    }
}

/// Express a Celsius `value` in `unit`.
pub fn from_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => value * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        TemperatureUnit::Kelvin => value + KELVIN_OFFSET,
    }
}

/// Convert `value` from one unit to another.
///
/// Total over finite inputs; NaN and infinities pass through ordinary
/// floating-point arithmetic.
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    let celsius = to_celsius(value, from);
    let result = from_celsius(celsius, to);
    tracing::trace!(value, %from, %to, result, "converted temperature");
    result
}
