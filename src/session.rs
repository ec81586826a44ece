//! Interactive session: the controller behind the converter, favorites,
//! weather and map screens.
//!
//! Every command produces output lines. Failures become notices; nothing a
//! user types ends the session except `quit`.

use std::sync::Arc;

use tempconv_core::{AppError, Config};
use tempconv_units::{
    convert, format_result, parse_value, AddOutcome, FavoriteConversion, FavoritesRegistry,
    TemperatureUnit,
};
use tempconv_weather::{WeatherMap, WeatherService, MARKER_REMOVED};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::command::{self, Command, HELP};

pub struct Session {
    favorites: FavoritesRegistry,
    from: TemperatureUnit,
    to: TemperatureUnit,
    display_unit: TemperatureUnit,
    weather: WeatherService,
    map: WeatherMap,
}

impl Session {
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let weather = WeatherService::new(&config)?;
        let display_unit = config.weather.display_unit;

        Ok(Self {
            favorites: FavoritesRegistry::new(),
            from: config.converter.default_from,
            to: config.converter.default_to,
            display_unit,
            weather,
            map: WeatherMap::new(&config.map, display_unit),
        })
    }

    pub fn selection(&self) -> FavoriteConversion {
        FavoriteConversion::new(self.from, self.to)
    }

    pub fn set_from(&mut self, unit: TemperatureUnit) {
        self.from = unit;
    }

    pub fn set_to(&mut self, unit: TemperatureUnit) {
        self.to = unit;
    }

    /// Convert raw user text with the current selection.
    pub fn convert(&self, raw: &str) -> Result<String, AppError> {
        let value = parse_value(raw)?;
        Ok(format_result(convert(value, self.from, self.to), self.to))
    }

    /// Add the current selection to favorites and report what happened.
    pub fn add_favorite(&mut self) -> String {
        let favorite = self.selection();
        match self.favorites.add(favorite) {
            AddOutcome::Added => format!("Added {} to favorites", favorite),
            AddOutcome::AlreadyExists => format!("{} is already in your favorites", favorite),
        }
    }

    pub fn list_favorites(&self) -> Vec<String> {
        if self.favorites.is_empty() {
            return vec!["No favorites yet. Use 'fav' to add one.".to_string()];
        }
        self.favorites
            .iter()
            .enumerate()
            .map(|(i, favorite)| format!("{}. {}", i, favorite))
            .collect()
    }

    /// Load favorite `index` into the selection.
    pub fn select_favorite(&mut self, index: usize) -> Result<FavoriteConversion, AppError> {
        let favorite = self.favorites.select(index)?;
        self.from = favorite.from;
        self.to = favorite.to;
        Ok(favorite)
    }

    /// Weather here, or for `city`, rendered in the display unit.
    pub async fn weather(&self, city: Option<&str>) -> Result<String, AppError> {
        let report = match city {
            Some(city) => self.weather.for_city(city).await?,
            None => self.weather.at_current_location().await?,
        };
        Ok(report.render(self.display_unit))
    }

    /// Weather at explicit coordinates.
    pub async fn weather_at(&self, latitude: f64, longitude: f64) -> Result<String, AppError> {
        let report = self.weather.at(latitude, longitude).await?;
        Ok(report.render(self.display_unit))
    }

    /// Tap the map: returns the marker title and the status line.
    pub async fn tap(&mut self, latitude: f64, longitude: f64) -> Result<Vec<String>, AppError> {
        let unit = self.display_unit;
        let title = self
            .map
            .tap(&self.weather, latitude, longitude)
            .await?
            .title(unit);

        let mut lines = vec![title];
        lines.extend(self.map.info_text());
        Ok(lines)
    }

    pub fn long_press(&mut self) -> String {
        if self.map.long_press() {
            MARKER_REMOVED.to_string()
        } else {
            "No marker to remove.".to_string()
        }
    }

    /// Viewport line, then the marker status line when a marker is shown.
    pub fn map_lines(&self) -> Vec<String> {
        let mut lines = vec![self.map.viewport_text()];
        lines.extend(
            self.map
                .info_text()
                .iter()
                .flat_map(|text| text.lines().map(str::to_string)),
        );
        lines
    }

    pub fn status(&self) -> String {
        format!(
            "From: {}  To: {}  Favorites: {}",
            self.from,
            self.to,
            self.favorites.len()
        )
    }

    /// Run one command. Errors come back as notice lines.
    pub async fn execute(&mut self, command: Command) -> Vec<String> {
        let result = match command {
            Command::Convert(raw) => self.convert(&raw).map(|line| vec![line]),
            Command::From(unit) => {
                self.set_from(unit);
                Ok(vec![self.status()])
            }
            Command::To(unit) => {
                self.set_to(unit);
                Ok(vec![self.status()])
            }
            Command::AddFavorite => Ok(vec![self.add_favorite()]),
            Command::ListFavorites => Ok(self.list_favorites()),
            Command::Select(index) => self
                .select_favorite(index)
                .map(|favorite| vec![format!("Selected {}", favorite)]),
            Command::Weather(city) => self
                .weather(city.as_deref())
                .await
                .map(|text| text.lines().map(str::to_string).collect()),
            Command::Tap {
                latitude,
                longitude,
            } => self.tap(latitude, longitude).await.map(|lines| {
                lines
                    .iter()
                    .flat_map(|text| text.lines().map(str::to_string))
                    .collect()
            }),
            Command::Press => Ok(vec![self.long_press()]),
            Command::Map => Ok(self.map_lines()),
            Command::Units => Ok(unit_lines()),
            Command::Status => Ok(vec![self.status()]),
            Command::Help => Ok(HELP.iter().map(|line| line.to_string()).collect()),
            Command::Quit => Ok(Vec::new()),
        };

        result.unwrap_or_else(|e| {
            tracing::debug!("Command failed: {}", e);
            vec![e.user_message().to_string()]
        })
    }

    /// Read commands line by line until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        output
            .write_all(b"Type 'help' for a list of commands.\n")
            .await?;
        output.flush().await?;

        while let Some(line) = lines.next_line().await? {
            let reply = match command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command).await,
                Err(e) => vec![e.to_string()],
            };

            for line in reply {
                output.write_all(line.as_bytes()).await?;
                output.write_all(b"\n").await?;
            }
            output.flush().await?;
        }

        tracing::debug!("Session ended with {} favorites", self.favorites.len());
        Ok(())
    }
}

/// One line per supported unit: label and symbol.
pub fn unit_lines() -> Vec<String> {
    TemperatureUnit::ALL
        .iter()
        .map(|unit| format!("{:<12}{}", unit.label(), unit.symbol()))
        .collect()
}
