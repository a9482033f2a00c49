//! Core library for the Meteo Maroc weather widget.
//!
//! This crate defines:
//! - Configuration & API key handling
//! - The city directory loader
//! - Abstraction over the weather provider, with an OpenWeather implementation
//! - The weather fetcher (current conditions + forecast, all-or-nothing)
//! - Daily / hourly forecast views
//!
//! It holds no UI state; `meteo-widget` builds the state coordinator on top.

pub mod config;
pub mod directory;
pub mod error;
pub mod fetcher;
pub mod forecast;
pub mod model;
pub mod provider;

pub use config::Config;
pub use directory::{CityDirectory, HttpCityDirectory};
pub use error::{DirectoryLoadError, Endpoint, WeatherFetchError};
pub use fetcher::fetch_weather;
pub use forecast::{daily_forecast, daily_forecast_in, hourly_forecast};
pub use model::{CityOption, ConditionCategory, ForecastSample, WeatherReport, WeatherSnapshot};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
