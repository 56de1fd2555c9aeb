pub mod combinations;
pub mod filter;
pub mod ranking;
pub mod repetition;
pub mod requirements;
pub mod scoring;

pub use combinations::DEFAULT_MAX_COMBINATIONS;
pub use ranking::FALLBACK_CONFIDENCE;

use std::sync::Arc;
use std::time::Instant;

use crate::{
    error::AppResult,
    models::{EventContext, PlannedOutfit, WardrobeItem, WeatherForecast},
    providers::{HistoryProvider, WardrobeProvider, WeatherProvider},
};

/// Orchestrates the recommendation pipeline end to end
///
/// Constructed with its three providers (explicit dependency injection, no
/// ambient singletons) and held by the caller. Each call builds its own
/// requirements and combination lists, so concurrent calls share nothing
/// mutable.
pub struct OutfitPlanner {
    wardrobe: Arc<dyn WardrobeProvider>,
    weather: Arc<dyn WeatherProvider>,
    history: Arc<dyn HistoryProvider>,
    max_combinations: usize,
}

impl OutfitPlanner {
    pub fn new(
        wardrobe: Arc<dyn WardrobeProvider>,
        weather: Arc<dyn WeatherProvider>,
        history: Arc<dyn HistoryProvider>,
    ) -> Self {
        Self {
            wardrobe,
            weather,
            history,
            max_combinations: DEFAULT_MAX_COMBINATIONS,
        }
    }

    pub fn with_max_combinations(mut self, max_combinations: usize) -> Self {
        self.max_combinations = max_combinations;
        self
    }

    /// Suggests the best outfit for the event.
    ///
    /// Awaits the three providers, then runs the synchronous pipeline over
    /// the snapshots. `previous` holds outfits already returned for this
    /// event so repeated calls diversify; `weather_override` skips the
    /// weather provider when the caller already has a forecast.
    pub async fn suggest_outfit(
        &self,
        event: &EventContext,
        weather_override: Option<WeatherForecast>,
        previous: &[PlannedOutfit],
    ) -> AppResult<PlannedOutfit> {
        let start = Instant::now();

        let items = self.wardrobe.fetch_items().await?;
        let forecast = match weather_override {
            Some(forecast) => Some(forecast),
            None => {
                self.weather
                    .forecast(event.location.as_deref(), event.start)
                    .await?
            }
        };
        let mut history = self.history.recent_outfits().await?;
        history.extend_from_slice(previous);

        let outfit = self.recommend(event, forecast.as_ref(), &items, &history);

        tracing::info!(
            event_id = %event.id,
            event_type = ?event.event_type,
            wardrobe_size = items.len(),
            has_forecast = forecast.is_some(),
            confidence = outfit.confidence,
            processing_time_ms = start.elapsed().as_millis() as u64,
            "Outfit suggested"
        );

        Ok(outfit)
    }

    /// Suggests up to `count` distinct outfit variants for one event.
    ///
    /// Runs sequentially on purpose: each iteration feeds the outfits already
    /// returned into the repetition guard so successive suggestions diversify.
    pub async fn suggest_outfits(
        &self,
        event: &EventContext,
        weather_override: Option<WeatherForecast>,
        count: usize,
    ) -> AppResult<Vec<PlannedOutfit>> {
        let mut suggestions: Vec<PlannedOutfit> = Vec::with_capacity(count);

        for _ in 0..count {
            let outfit = self
                .suggest_outfit(event, weather_override.clone(), &suggestions)
                .await?;
            suggestions.push(outfit);
        }

        Ok(suggestions)
    }

    /// The pure, synchronous pipeline over immutable snapshots
    pub fn recommend(
        &self,
        event: &EventContext,
        weather: Option<&WeatherForecast>,
        items: &[WardrobeItem],
        history: &[PlannedOutfit],
    ) -> PlannedOutfit {
        self.plan(event, weather, items, history)
            .into_iter()
            .next()
            .unwrap_or_else(|| ranking::fallback_outfit(event))
    }

    /// Full ranked list for one event, best first
    pub fn plan(
        &self,
        event: &EventContext,
        weather: Option<&WeatherForecast>,
        items: &[WardrobeItem],
        history: &[PlannedOutfit],
    ) -> Vec<PlannedOutfit> {
        let req = requirements::analyze(event, weather);
        let candidates = filter::filter_items(items, &req);
        let candidates = repetition::apply(candidates, history, event);

        let mut combos = combinations::generate(&candidates, &req, self.max_combinations);
        for combo in &mut combos {
            scoring::score(combo, event, weather);
        }

        ranking::rank(combos, event, weather)
    }
}
