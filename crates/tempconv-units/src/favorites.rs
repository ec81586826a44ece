//! Favorite unit pairs.
//!
//! The registry keeps insertion order for display and never holds two equal
//! pairs. It lives as long as the session that owns it and is never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FavoritesError;
use crate::unit::TemperatureUnit;

/// A remembered (from, to) conversion. Direction matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteConversion {
    pub from: TemperatureUnit,
    pub to: TemperatureUnit,
}

impl FavoriteConversion {
    pub fn new(from: TemperatureUnit, to: TemperatureUnit) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for FavoriteConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from.label(), self.to.label())
    }
}

/// Result of [`FavoritesRegistry::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// Ordered, deduplicated collection of favorite conversions
///
/// Serialized as a plain list. Loading a list that repeats a pair fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(
    into = "Vec<FavoriteConversion>",
    try_from = "Vec<FavoriteConversion>"
)]
pub struct FavoritesRegistry {
    entries: Vec<FavoriteConversion>,
}

impl FavoritesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `fav` unless an equal pair is already present.
    pub fn add(&mut self, fav: FavoriteConversion) -> AddOutcome {
        if self.contains(&fav) {
            tracing::debug!("Favorite already present: {}", fav);
            return AddOutcome::AlreadyExists;
        }
        self.entries.push(fav);
        tracing::debug!("Added favorite #{}: {}", self.entries.len() - 1, fav);
        AddOutcome::Added
    }

    /// The entry at `index`, in insertion order.
    pub fn select(&self, index: usize) -> Result<FavoriteConversion, FavoritesError> {
        self.get(index).ok_or(FavoritesError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn get(&self, index: usize) -> Option<FavoriteConversion> {
        self.entries.get(index).copied()
    }

    pub fn contains(&self, fav: &FavoriteConversion) -> bool {
        self.entries.iter().any(|existing| existing == fav)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteConversion> {
        self.entries.iter()
    }

    /// Rendered rows for a selectable list, e.g. "Celsius → Kelvin".
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl TryFrom<Vec<FavoriteConversion>> for FavoritesRegistry {
    type Error = FavoritesError;

    fn try_from(entries: Vec<FavoriteConversion>) -> Result<Self, Self::Error> {
        let mut registry = Self::new();
        for fav in entries {
            if registry.add(fav) == AddOutcome::AlreadyExists {
                return Err(FavoritesError::Duplicate(fav));
            }
        }
        Ok(registry)
    }
}

impl From<FavoritesRegistry> for Vec<FavoriteConversion> {
    fn from(registry: FavoritesRegistry) -> Self {
        registry.entries
    }
}
