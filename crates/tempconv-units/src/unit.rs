use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnitParseError;

/// Temperature unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Every unit, in picker order.
    pub const ALL: [TemperatureUnit; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    /// Display label shown in unit pickers and result lines
    pub fn label(&self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
            Self::Kelvin => "Kelvin",
        }
    }

    /// Short symbol used next to a reading, e.g. "21.5 °C"
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnitParseError;

    /// Accepts the label, the symbol, or a one-letter short form, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "c" | "celsius" | "°c" => Ok(Self::Celsius),
            "f" | "fahrenheit" | "°f" => Ok(Self::Fahrenheit),
            "k" | "kelvin" => Ok(Self::Kelvin),
            _ => Err(UnitParseError(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(TemperatureUnit::Celsius.label(), "Celsius");
        assert_eq!(TemperatureUnit::Fahrenheit.label(), "Fahrenheit");
        assert_eq!(TemperatureUnit::Kelvin.label(), "Kelvin");
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(TemperatureUnit::Kelvin.to_string(), "Kelvin");
    }

    #[test]
    fn test_all_is_picker_order() {
        assert_eq!(
            TemperatureUnit::ALL,
            [
                TemperatureUnit::Celsius,
                TemperatureUnit::Fahrenheit,
                TemperatureUnit::Kelvin
            ]
        );
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!("c".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!("F".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!(" k ".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin);
    }

    #[test]
    fn test_parse_labels_and_symbols() {
        assert_eq!("Celsius".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!("°F".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!("KELVIN".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin);
    }

    #[test]
    fn test_parse_unknown_unit() {
        let err = "rankine".parse::<TemperatureUnit>().unwrap_err();
        assert_eq!(err.0, "rankine");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(json, "\"fahrenheit\"");
        let unit: TemperatureUnit = serde_json::from_str("\"kelvin\"").unwrap();
        assert_eq!(unit, TemperatureUnit::Kelvin);
    }
}
