//! Errors raised by the converter surfaces.

use thiserror::Error;

use crate::favorites::FavoriteConversion;

/// Raw text from the value field could not be used as a temperature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("No value entered")]
    Empty,

    #[error("Not a finite number: {0}")]
    InvalidNumber(String),
}

impl InputError {
    pub fn user_message(&self) -> &'static str {
        match self {
            InputError::Empty => "Please enter a value",
            InputError::InvalidNumber(_) => "Please enter a valid number",
        }
    }
}

/// Unit name that matches none of the known units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown temperature unit: {0}")]
pub struct UnitParseError(pub String);

impl UnitParseError {
    pub fn user_message(&self) -> &'static str {
        "Unknown unit. Use Celsius, Fahrenheit or Kelvin."
    }
}

/// Favorites registry errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FavoritesError {
    #[error("Favorite index {index} out of range (registry holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Favorite listed twice: {0}")]
    Duplicate(FavoriteConversion),
}

impl FavoritesError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FavoritesError::IndexOutOfRange { .. } => "No favorite at that position.",
            FavoritesError::Duplicate(_) => "This conversion is already in your favorites",
        }
    }
}
