//! Line commands understood by the interactive session.

use tempconv_units::{TemperatureUnit, UnitParseError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Convert the raw value with the current unit selection
    Convert(String),
    From(TemperatureUnit),
    To(TemperatureUnit),
    /// Add the current selection to favorites
    AddFavorite,
    ListFavorites,
    /// Load a favorite (0-based) into the unit selection
    Select(usize),
    /// Weather here, or for the named city
    Weather(Option<String>),
    /// Tap the weather map
    Tap { latitude: f64, longitude: f64 },
    /// Long press on the weather map
    Press,
    /// Show the map viewport and marker status
    Map,
    Units,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{value}' is not a valid {what}")]
    InvalidArgument { value: String, what: &'static str },

    #[error(transparent)]
    Unit(#[from] UnitParseError),
}

pub const HELP: &[&str] = &[
    "Commands:",
    "  <number> | convert <value>   convert with the current units",
    "  from <unit> / to <unit>      pick units (c, f, k or full names)",
    "  fav                          add current units to favorites",
    "  favs                         list favorites",
    "  select <n>                   use favorite n",
    "  weather [city]               weather here, or in a city",
    "  tap <lat> <lon>              tap the weather map",
    "  press                        long press: remove the map marker",
    "  map                          map center and marker status",
    "  units | status | help | quit",
];

/// Parse one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_lowercase().as_str() {
        "convert" | "c" => Command::Convert(rest.to_string()),
        "from" => Command::From(unit_arg("from", rest)?),
        "to" => Command::To(unit_arg("to", rest)?),
        "fav" | "favorite" => Command::AddFavorite,
        "favs" | "favorites" => Command::ListFavorites,
        "select" => Command::Select(index_arg(rest)?),
        "weather" => {
            if rest.is_empty() {
                Command::Weather(None)
            } else {
                Command::Weather(Some(rest.to_string()))
            }
        }
        "tap" => {
            let (latitude, longitude) = coordinates_arg(rest)?;
            Command::Tap {
                latitude,
                longitude,
            }
        }
        "press" => Command::Press,
        "map" => Command::Map,
        "units" => Command::Units,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        // A bare number is a conversion request
        _ if head.parse::<f64>().is_ok() && rest.is_empty() => Command::Convert(head.to_string()),
        _ => return Err(CommandError::Unknown(head.to_string())),
    };

    Ok(Some(command))
}

fn unit_arg(command: &'static str, rest: &str) -> Result<TemperatureUnit, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            what: "a unit",
        });
    }
    Ok(rest.parse()?)
}

fn index_arg(rest: &str) -> Result<usize, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "select",
            what: "a favorite number",
        });
    }
    rest.parse().map_err(|_| CommandError::InvalidArgument {
        value: rest.to_string(),
        what: "favorite number",
    })
}

fn coordinates_arg(rest: &str) -> Result<(f64, f64), CommandError> {
    let mut parts = rest.split_whitespace();
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CommandError::MissingArgument {
            command: "tap",
            what: "a latitude and a longitude",
        });
    };

    let parse = |value: &str| {
        value.parse::<f64>().map_err(|_| CommandError::InvalidArgument {
            value: value.to_string(),
            what: "coordinate",
        })
    };
    Ok((parse(lat)?, parse(lon)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_bare_number_converts() {
        assert_eq!(parse("-40"), Ok(Some(Command::Convert("-40".into()))));
        assert_eq!(parse(" 36.6 "), Ok(Some(Command::Convert("36.6".into()))));
    }

    #[test]
    fn test_convert_keeps_raw_text() {
        assert_eq!(parse("convert abc"), Ok(Some(Command::Convert("abc".into()))));
        assert_eq!(parse("convert"), Ok(Some(Command::Convert(String::new()))));
    }

    #[test]
    fn test_unit_selection() {
        assert_eq!(parse("from k"), Ok(Some(Command::From(TemperatureUnit::Kelvin))));
        assert_eq!(
            parse("TO Fahrenheit"),
            Ok(Some(Command::To(TemperatureUnit::Fahrenheit)))
        );
        assert!(matches!(parse("from"), Err(CommandError::MissingArgument { .. })));
        assert!(matches!(parse("to rankine"), Err(CommandError::Unit(_))));
    }

    #[test]
    fn test_select() {
        assert_eq!(parse("select 2"), Ok(Some(Command::Select(2))));
        assert!(matches!(parse("select two"), Err(CommandError::InvalidArgument { .. })));
        assert!(matches!(parse("select -1"), Err(CommandError::InvalidArgument { .. })));
    }

    #[test]
    fn test_weather_city_keeps_spaces() {
        assert_eq!(parse("weather"), Ok(Some(Command::Weather(None))));
        assert_eq!(
            parse("weather New York"),
            Ok(Some(Command::Weather(Some("New York".into()))))
        );
    }

    #[test]
    fn test_tap_coordinates() {
        assert_eq!(
            parse("tap 45.5 -73.6"),
            Ok(Some(Command::Tap {
                latitude: 45.5,
                longitude: -73.6
            }))
        );
        assert!(matches!(parse("tap 45.5"), Err(CommandError::MissingArgument { .. })));
        assert!(matches!(parse("tap a b"), Err(CommandError::InvalidArgument { .. })));
    }

    #[test]
    fn test_map_commands() {
        assert_eq!(parse("press"), Ok(Some(Command::Press)));
        assert_eq!(parse("MAP"), Ok(Some(Command::Map)));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse("frobnicate now"),
            Err(CommandError::Unknown("frobnicate".into()))
        );
    }
}
