use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
}

/// Forecast value object from the weather collaborator
///
/// The engine degrades to "no weather considerations" whenever a forecast is
/// unavailable; every consumer takes `Option<&WeatherForecast>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub condition: WeatherCondition,
    /// Degrees Celsius
    pub temperature_c: f32,
    /// 0..=100
    pub precipitation_chance: u8,
    /// 0..=100
    pub humidity: u8,
    /// Kilometers per hour
    pub wind_speed_kmh: f32,
}

impl WeatherForecast {
    pub fn is_cold(&self) -> bool {
        self.temperature_c < 10.0
    }

    pub fn is_hot(&self) -> bool {
        self.temperature_c >= 20.0
    }

    pub fn is_rainy(&self) -> bool {
        self.precipitation_chance > 60
    }

    pub fn is_windy(&self) -> bool {
        self.wind_speed_kmh > 20.0
    }
}
