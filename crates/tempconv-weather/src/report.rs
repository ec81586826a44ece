use tempconv_units::{convert, TemperatureUnit};

use crate::types::WeatherReport;

impl WeatherReport {
    /// Current temperature expressed in `unit` (the API reports Celsius).
    pub fn temperature_in(&self, unit: TemperatureUnit) -> f64 {
        convert(self.current.temperature, TemperatureUnit::Celsius, unit)
    }

    /// Multi-line text for the weather panel.
    pub fn render(&self, unit: TemperatureUnit) -> String {
        let description = self.current.condition.description();
        let temperature = format!("Temperature: {:.1} {}", self.temperature_in(unit), unit.symbol());
        let wind = format!("Wind: {:.1} km/h", self.current.wind_speed);

        match &self.place {
            Some(place) => format!(
                "{}\n\nCondition: {}\n{}\n{}",
                place, description, temperature, wind
            ),
            None => format!("{}\n{}\n{}", description, temperature, wind),
        }
    }
}
