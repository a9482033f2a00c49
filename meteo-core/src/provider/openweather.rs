use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    config::DEFAULT_WEATHER_BASE_URL,
    error::{Endpoint, WeatherFetchError, truncate_body},
    model::{ConditionCategory, ForecastSample, WeatherSnapshot},
};

use super::WeatherProvider;

/// Unit system sent with every request.
const UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at another host, e.g. a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, endpoint: Endpoint) -> String {
        let path = match endpoint {
            Endpoint::Current => "weather",
            Endpoint::Forecast => "forecast",
        };
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        city: &str,
    ) -> Result<T, WeatherFetchError> {
        tracing::debug!(%endpoint, city, "Requesting OpenWeather");

        let res = self
            .http
            .get(self.url(endpoint))
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
            ])
            .send()
            .await
            .map_err(|source| WeatherFetchError::Request { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| WeatherFetchError::Request { endpoint, source })?;

        if !status.is_success() {
            return Err(WeatherFetchError::Status {
                endpoint,
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| WeatherFetchError::Parse { endpoint, source })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    #[serde(default)]
    visibility: Option<u32>,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    weather: Vec<OwWeather>,
    #[serde(default)]
    pop: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(parsed: OwCurrentResponse) -> Self {
        let (condition, description) = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| (w.main, w.description))
            .unwrap_or_default();

        WeatherSnapshot {
            location_name: parsed.name,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            temp_min_c: parsed.main.temp_min,
            temp_max_c: parsed.main.temp_max,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
            visibility_m: parsed.visibility,
            category: ConditionCategory::from_main(&condition),
            condition,
            description,
            sunrise: unix_to_utc(parsed.sys.sunrise),
            sunset: unix_to_utc(parsed.sys.sunset),
        }
    }
}

impl From<OwForecastEntry> for ForecastSample {
    fn from(entry: OwForecastEntry) -> Self {
        let category = entry
            .weather
            .first()
            .map(|w| ConditionCategory::from_main(&w.main))
            .unwrap_or_default();

        ForecastSample {
            time: unix_to_utc(entry.dt),
            temperature_c: entry.main.temp,
            temp_min_c: entry.main.temp_min,
            temp_max_c: entry.main.temp_max,
            category,
            pop: entry.pop.clamp(0.0, 1.0),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, WeatherFetchError> {
        let parsed: OwCurrentResponse = self.get_json(Endpoint::Current, city).await?;
        Ok(parsed.into())
    }

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>, WeatherFetchError> {
        let parsed: OwForecastResponse = self.get_json(Endpoint::Forecast, city).await?;
        Ok(parsed.list.into_iter().map(ForecastSample::from).collect())
    }
}

fn unix_to_utc(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap_or_default()
}
