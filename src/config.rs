use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Redis connection URL (forecast cache)
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Whether to query the external weather API for forecasts
    #[serde(default)]
    pub weather_enabled: bool,

    /// Open-Meteo API base URL
    #[serde(default = "default_weather_api_url")]
    pub weather_api_url: String,

    /// Default latitude used for weather lookups
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Default longitude used for weather lookups
    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Upper bound on generated outfit combinations per request
    #[serde(default = "default_max_combinations")]
    pub max_combinations: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_weather_api_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_latitude() -> f64 {
    40.7128
}

fn default_longitude() -> f64 {
    -74.0060
}

fn default_max_combinations() -> usize {
    5000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
