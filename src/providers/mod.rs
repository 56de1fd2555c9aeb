//! Provider abstractions for the data the planner consumes
//!
//! The engine performs no I/O of its own: wardrobe contents, weather
//! forecasts and outfit history all arrive through these traits, injected
//! into the planner at construction time. Provider failure surfaces as an
//! error; a missing forecast is `Ok(None)` and never a failure.

use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    models::{PlannedOutfit, WardrobeItem, WeatherForecast},
};

pub mod memory;
pub mod open_meteo;

pub use memory::{InMemoryHistory, InMemoryWardrobe, StaticWeather};
pub use open_meteo::OpenMeteoProvider;

/// Source of candidate wardrobe items
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WardrobeProvider: Send + Sync {
    /// Fetch the full wardrobe snapshot for one recommendation call
    async fn fetch_items(&self) -> AppResult<Vec<WardrobeItem>>;
}

/// Source of weather forecasts
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Forecast for the event's location and date
    ///
    /// `Ok(None)` means no forecast is available for that date; the engine
    /// then plans without weather considerations.
    async fn forecast<'a>(
        &self,
        location: Option<&'a str>,
        date: DateTime<Utc>,
    ) -> AppResult<Option<WeatherForecast>>;
}

/// Source of previously planned outfits, read by the repetition guard
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HistoryProvider: Send + Sync {
    async fn recent_outfits(&self) -> AppResult<Vec<PlannedOutfit>>;
}
