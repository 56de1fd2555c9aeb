use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{PlannedOutfit, WardrobeItem, WeatherForecast},
};

use super::{HistoryProvider, WardrobeProvider, WeatherProvider};

/// In-memory wardrobe store backing the HTTP API
#[derive(Default)]
pub struct InMemoryWardrobe {
    items: RwLock<Vec<WardrobeItem>>,
}

impl InMemoryWardrobe {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, item: WardrobeItem) {
        self.items.write().await.push(item);
    }

    pub async fn list(&self) -> Vec<WardrobeItem> {
        self.items.read().await.clone()
    }
}

#[async_trait::async_trait]
impl WardrobeProvider for InMemoryWardrobe {
    async fn fetch_items(&self) -> AppResult<Vec<WardrobeItem>> {
        Ok(self.items.read().await.clone())
    }
}

/// In-memory outfit history store
#[derive(Default)]
pub struct InMemoryHistory {
    outfits: RwLock<Vec<PlannedOutfit>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, outfit: PlannedOutfit) {
        self.outfits.write().await.push(outfit);
    }

    pub async fn list(&self) -> Vec<PlannedOutfit> {
        self.outfits.read().await.clone()
    }
}

#[async_trait::async_trait]
impl HistoryProvider for InMemoryHistory {
    async fn recent_outfits(&self) -> AppResult<Vec<PlannedOutfit>> {
        Ok(self.outfits.read().await.clone())
    }
}

/// Weather provider returning a fixed forecast (or none at all)
///
/// Used when the external weather API is disabled, and in tests.
#[derive(Default)]
pub struct StaticWeather {
    forecast: Option<WeatherForecast>,
}

impl StaticWeather {
    /// A provider that never has a forecast
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn fixed(forecast: WeatherForecast) -> Self {
        Self {
            forecast: Some(forecast),
        }
    }
}

#[async_trait::async_trait]
impl WeatherProvider for StaticWeather {
    async fn forecast<'a>(
        &self,
        _location: Option<&'a str>,
        _date: DateTime<Utc>,
    ) -> AppResult<Option<WeatherForecast>> {
        Ok(self.forecast.clone())
    }
}
