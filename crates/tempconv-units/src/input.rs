//! Text surfaces around the conversion engine: reading the value field and
//! rendering the result line.

use crate::error::InputError;
use crate::unit::TemperatureUnit;

/// Parse the raw value field into a finite number.
pub fn parse_value(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidNumber(trimmed.to_string())),
    }
}

/// Result line shown under the converter, e.g. "Result: 212.00 Fahrenheit".
pub fn format_result(value: f64, unit: TemperatureUnit) -> String {
    format!("Result: {:.2} {}", value, unit.label())
}
