use std::sync::Arc;

use attire_api::api::{create_router, AppState};
use attire_api::config::Config;
use attire_api::providers::{OpenMeteoProvider, StaticWeather, WeatherProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attire_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    let weather: Arc<dyn WeatherProvider> = if config.weather_enabled {
        let redis_client = redis::Client::open(config.redis_url.clone())?;
        Arc::new(OpenMeteoProvider::new(
            redis_client,
            config.weather_api_url.clone(),
            config.latitude,
            config.longitude,
        ))
    } else {
        tracing::info!("Weather API disabled, suggestions will not use forecasts");
        Arc::new(StaticWeather::unavailable())
    };

    let state = AppState::new(weather, config.max_combinations);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
