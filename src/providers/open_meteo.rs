use chrono::{DateTime, NaiveDate, Utc};
use redis::{AsyncCommands, Client as RedisClient};
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{WeatherCondition, WeatherForecast},
};

use super::WeatherProvider;

const CACHE_TTL: u64 = 10800; // 3 hours in seconds

/// Weather provider backed by the Open-Meteo forecast API
///
/// Forecasts are fetched per day for a fixed set of coordinates and cached in
/// Redis. Dates beyond the forecast horizon yield `Ok(None)`.
pub struct OpenMeteoProvider {
    http_client: HttpClient,
    redis_client: RedisClient,
    api_url: String,
    latitude: f64,
    longitude: f64,
}

/// Daily block of the Open-Meteo response
#[derive(Debug, Clone, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    weather_code: Vec<u16>,
    temperature_2m_max: Vec<f32>,
    temperature_2m_min: Vec<f32>,
    precipitation_probability_max: Vec<u8>,
    wind_speed_10m_max: Vec<f32>,
    relative_humidity_2m_mean: Vec<u8>,
}

#[derive(Debug, Clone, Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
}

impl OpenMeteoProvider {
    pub fn new(redis_client: RedisClient, api_url: String, latitude: f64, longitude: f64) -> Self {
        Self {
            http_client: HttpClient::new(),
            redis_client,
            api_url,
            latitude,
            longitude,
        }
    }

    fn cache_key(&self, date: NaiveDate) -> String {
        format!("forecast:{:.2}:{:.2}:{}", self.latitude, self.longitude, date)
    }

    async fn get_from_redis(&self, key: &str) -> AppResult<Option<WeatherForecast>> {
        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;

        let cached: Option<String> = conn.get(key).await.map_err(|e| {
            tracing::warn!(error = %e, "Redis get failed");
            e
        })?;

        match cached {
            Some(json) => {
                let forecast: WeatherForecast = serde_json::from_str(&json)
                    .map_err(|e| AppError::Internal(format!("Cache deserialization error: {}", e)))?;
                Ok(Some(forecast))
            }
            None => Ok(None),
        }
    }

    async fn store_in_redis(&self, key: &str, forecast: &WeatherForecast) -> AppResult<()> {
        let json = serde_json::to_string(forecast)
            .map_err(|e| AppError::Internal(format!("Cache serialization error: {}", e)))?;

        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;

        let _: () = conn.set_ex(key, json, CACHE_TTL).await.map_err(|e| {
            tracing::warn!(error = %e, "Redis set failed");
            e
        })?;

        tracing::debug!(key = %key, ttl = CACHE_TTL, "Cached forecast");

        Ok(())
    }

    /// Calls the Open-Meteo forecast endpoint
    async fn call_api(&self, date: NaiveDate) -> AppResult<Option<WeatherForecast>> {
        let url = format!("{}/v1/forecast", self.api_url);

        tracing::debug!(date = %date, "Fetching forecast from Open-Meteo");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                (
                    "daily",
                    "weather_code,temperature_2m_max,temperature_2m_min,\
                     precipitation_probability_max,wind_speed_10m_max,relative_humidity_2m_mean"
                        .to_string(),
                ),
                ("timezone", "UTC".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Open-Meteo request failed");
            return Err(AppError::Provider(format!(
                "Weather API returned status {}: {}",
                status, body
            )));
        }

        let payload: ForecastResponse = response.json().await?;
        Ok(convert_daily(&payload.daily, date))
    }
}

/// Extracts the forecast for one date from the daily arrays; `None` when the
/// date is outside the returned horizon
fn convert_daily(daily: &DailyBlock, date: NaiveDate) -> Option<WeatherForecast> {
    let date_key = date.to_string();
    let idx = daily.time.iter().position(|d| *d == date_key)?;

    let max = *daily.temperature_2m_max.get(idx)?;
    let min = *daily.temperature_2m_min.get(idx)?;

    Some(WeatherForecast {
        condition: condition_from_code(*daily.weather_code.get(idx)?),
        temperature_c: (max + min) / 2.0,
        precipitation_chance: *daily.precipitation_probability_max.get(idx)?,
        humidity: *daily.relative_humidity_2m_mean.get(idx)?,
        wind_speed_kmh: *daily.wind_speed_10m_max.get(idx)?,
    })
}

/// WMO weather interpretation codes
fn condition_from_code(code: u16) -> WeatherCondition {
    match code {
        0 => WeatherCondition::Clear,
        1 | 2 => WeatherCondition::PartlyCloudy,
        3 => WeatherCondition::Overcast,
        45 | 48 => WeatherCondition::Fog,
        51..=67 | 80..=82 => WeatherCondition::Rain,
        71..=77 | 85 | 86 => WeatherCondition::Snow,
        95..=99 => WeatherCondition::Thunderstorm,
        _ => WeatherCondition::Overcast,
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn forecast<'a>(
        &self,
        location: Option<&'a str>,
        date: DateTime<Utc>,
    ) -> AppResult<Option<WeatherForecast>> {
        if let Some(location) = location {
            // Coordinates are fixed per deployment; the event location is
            // informational only.
            tracing::debug!(location = %location, "Event location noted, using configured coordinates");
        }

        let date = date.date_naive();
        let key = self.cache_key(date);

        if let Some(cached) = self.get_from_redis(&key).await? {
            tracing::debug!(date = %date, "Forecast cache hit");
            return Ok(Some(cached));
        }

        tracing::debug!(date = %date, "Forecast cache miss");

        let forecast = self.call_api(date).await?;

        if let Some(forecast) = &forecast {
            self.store_in_redis(&key, forecast).await?;
        } else {
            tracing::info!(date = %date, "Date outside forecast horizon");
        }

        Ok(forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_block() -> DailyBlock {
        DailyBlock {
            time: vec!["2025-06-10".to_string(), "2025-06-11".to_string()],
            weather_code: vec![0, 61],
            temperature_2m_max: vec![24.0, 14.0],
            temperature_2m_min: vec![16.0, 8.0],
            precipitation_probability_max: vec![5, 85],
            wind_speed_10m_max: vec![12.0, 30.0],
            relative_humidity_2m_mean: vec![40, 90],
        }
    }

    #[test]
    fn test_convert_daily_picks_requested_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        let forecast = convert_daily(&daily_block(), date).unwrap();
        assert_eq!(forecast.condition, WeatherCondition::Rain);
        assert_eq!(forecast.temperature_c, 11.0);
        assert_eq!(forecast.precipitation_chance, 85);
        assert_eq!(forecast.humidity, 90);
        assert_eq!(forecast.wind_speed_kmh, 30.0);
    }

    #[test]
    fn test_convert_daily_out_of_horizon() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert!(convert_daily(&daily_block(), date).is_none());
    }

    #[test]
    fn test_condition_codes() {
        assert_eq!(condition_from_code(0), WeatherCondition::Clear);
        assert_eq!(condition_from_code(2), WeatherCondition::PartlyCloudy);
        assert_eq!(condition_from_code(3), WeatherCondition::Overcast);
        assert_eq!(condition_from_code(45), WeatherCondition::Fog);
        assert_eq!(condition_from_code(63), WeatherCondition::Rain);
        assert_eq!(condition_from_code(81), WeatherCondition::Rain);
        assert_eq!(condition_from_code(73), WeatherCondition::Snow);
        assert_eq!(condition_from_code(95), WeatherCondition::Thunderstorm);
        assert_eq!(condition_from_code(200), WeatherCondition::Overcast);
    }

    #[test]
    fn test_forecast_response_parsing() {
        let json = r#"{
            "daily": {
                "time": ["2025-06-10"],
                "weather_code": [3],
                "temperature_2m_max": [18.5],
                "temperature_2m_min": [11.5],
                "precipitation_probability_max": [20],
                "wind_speed_10m_max": [15.0],
                "relative_humidity_2m_mean": [60]
            }
        }"#;
        let parsed: ForecastResponse = serde_json::from_str(json).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let forecast = convert_daily(&parsed.daily, date).unwrap();
        assert_eq!(forecast.condition, WeatherCondition::Overcast);
        assert_eq!(forecast.temperature_c, 15.0);
    }
}
