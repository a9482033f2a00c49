use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A selectable city as published by the directory.
///
/// `value` is what gets sent to the weather provider, `label` is what the
/// user sees and searches against. Both carry the directory's `ville` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityOption {
    pub value: String,
    pub label: String,
}

impl CityOption {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { value: name.clone(), label: name }
    }
}

/// Coarse weather classification used to pick icons and backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Rain,
    #[default]
    Other,
}

impl ConditionCategory {
    /// Map the provider's `weather[0].main` field, ignoring case.
    pub fn from_main(main: &str) -> Self {
        match main.to_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "rain" => Self::Rain,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Clouds => "clouds",
            Self::Rain => "rain",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current conditions for one city, in metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
    /// Metres. The provider omits it for some stations.
    pub visibility_m: Option<u32>,
    pub category: ConditionCategory,
    /// Raw `main` text, e.g. "Clear" or "Haze".
    pub condition: String,
    pub description: String,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// One future time point of the multi-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub time: DateTime<Utc>,
    pub temperature_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub category: ConditionCategory,
    /// Probability of precipitation, 0.0 to 1.0.
    pub pop: f64,
}

/// Current conditions and the raw forecast sequence, fetched together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    pub forecast: Vec<ForecastSample>,
}
