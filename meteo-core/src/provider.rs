use crate::{
    Config,
    error::WeatherFetchError,
    model::{ForecastSample, WeatherSnapshot},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current conditions and multi-day forecasts, keyed by city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, WeatherFetchError>;

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>, WeatherFetchError>;
}

/// Construct the OpenWeather provider from config.
///
/// Fails up front when no API key is configured, so no request is ever sent
/// with an empty `appid`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    let provider =
        OpenWeatherProvider::new(api_key.to_owned()).with_base_url(&config.weather_base_url);

    Ok(Box::new(provider))
}
