use std::sync::Arc;

use crate::engine::{OutfitPlanner, DEFAULT_MAX_COMBINATIONS};
use crate::providers::{InMemoryHistory, InMemoryWardrobe, StaticWeather, WeatherProvider};

/// Shared application state
///
/// The planner holds the same wardrobe and history stores the handlers write
/// to, so suggestions always see the latest snapshot.
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<OutfitPlanner>,
    pub wardrobe: Arc<InMemoryWardrobe>,
    pub history: Arc<InMemoryHistory>,
}

impl AppState {
    pub fn new(weather: Arc<dyn WeatherProvider>, max_combinations: usize) -> Self {
        let wardrobe = Arc::new(InMemoryWardrobe::new());
        let history = Arc::new(InMemoryHistory::new());
        let planner = Arc::new(
            OutfitPlanner::new(wardrobe.clone(), weather, history.clone())
                .with_max_combinations(max_combinations),
        );

        Self {
            planner,
            wardrobe,
            history,
        }
    }

    /// State without an external weather source, used in tests and when the
    /// weather API is disabled
    pub fn without_weather() -> Self {
        Self::new(Arc::new(StaticWeather::unavailable()), DEFAULT_MAX_COMBINATIONS)
    }
}
